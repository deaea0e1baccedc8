//! Cosmic Quest - Entry Point
//!
//! Sets up logging and configuration, builds the play session, and runs a
//! small console loop that routes commands to the active screen. The games
//! themselves live in the library; this loop only translates typed commands
//! into game calls and prints the resulting state.

use clap::Parser;
use cosmic_quest::core::config::AppConfig;
use cosmic_quest::core::error::Result;
use cosmic_quest::data::nakshatras::NAKSHATRAS;
use cosmic_quest::data::planets::NAVAGRAHAS;
use cosmic_quest::data::zodiac::ZODIAC_SIGNS;
use cosmic_quest::games::eclipse::QuizOutcome;
use cosmic_quest::games::moon::CheckOutcome;
use cosmic_quest::games::nakshatra::TaskOutcome;
use cosmic_quest::games::orbit::SelectOutcome;
use cosmic_quest::games::seasons::MatchOutcome;
use cosmic_quest::games::zodiac::{TraceOutcome, TriviaOutcome};
use cosmic_quest::llm::client::LlmClient;
use cosmic_quest::llm::oracle;
use cosmic_quest::ui::state::LogCategory;
use cosmic_quest::ui::{Screen, Session};

use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "cosmic-quest", about = "Kid-friendly astronomy and astrology mini-games")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the LLM entirely; birth charts and facts use their fallbacks
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosmic_quest=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    tracing::info!("Cosmic Quest starting...");

    // Async runtime for the two oracle calls
    let rt = Runtime::new()?;

    let llm_client = if args.offline {
        None
    } else {
        LlmClient::from_settings(&config.llm).ok()
    };
    if llm_client.is_none() {
        tracing::warn!("no LLM available - birth charts and daily facts will use fallbacks");
    }

    let mut session = Session::new(&config, rand::random());

    println!();
    println!("=== COSMIC QUEST ===");
    println!("Restore the balance of the universe, Detective!");
    println!();
    print_help(session.screen);

    loop {
        // Advance the background animations once per command turn.
        session.animation_tick();

        print!("{} [{} shards]> ", session.screen.title(), session.player.shards);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, rest) = match input.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (input, ""),
        };

        match cmd {
            "quit" | "q" => break,
            "help" | "h" => print_help(session.screen),
            "status" => print_status(&session),
            "hub" => session.set_screen(Screen::Hub),
            "sky" => session.set_screen(Screen::SkyPlayground),
            "zodiac" => session.set_screen(Screen::ZodiacRealms),
            "planets" => session.set_screen(Screen::PlanetWorlds),
            "village" => session.set_screen(Screen::NakshatraVillage),
            "birth" => session.set_screen(Screen::BirthMap),
            "parent" => session.set_screen(Screen::ParentMode),
            _ => match session.screen {
                Screen::Hub => println!("Pick a screen: sky, zodiac, planets, village, birth, parent"),
                Screen::SkyPlayground => handle_sky(&mut session, cmd, rest),
                Screen::ZodiacRealms => handle_zodiac(&mut session, cmd, rest),
                Screen::PlanetWorlds => handle_planets(&mut session, cmd, rest),
                Screen::NakshatraVillage => handle_village(&mut session, cmd, rest),
                Screen::BirthMap => handle_birth(&mut session, &rt, llm_client.as_ref(), cmd, rest),
                Screen::ParentMode => handle_parent(&rt, llm_client.as_ref(), cmd),
            },
        }
    }

    println!(
        "\nGoodbye! Final haul: {} shards, {} constellations traced.",
        session.player.shards,
        session.zodiac.traced_count()
    );
    Ok(())
}

fn print_help(screen: Screen) {
    println!("Global: hub, sky, zodiac, planets, village, birth, parent, status, help, quit");
    match screen {
        Screen::Hub => {}
        Screen::SkyPlayground => {
            println!("Sky Playground: list | pick <planet> | place | reset");
        }
        Screen::ZodiacRealms => {
            println!("Zodiac Realms: list | info <sign> | trace <sign> | tap <n> | quiz <sign> | answer <n>");
        }
        Screen::PlanetWorlds => {
            println!("Planet Worlds: grahas | month <0-11.9> | orbit | game | submit | eclipse-angle <deg> | eclipse-check | eclipse-answer <n> | eclipse-next | day <0-29.5> | moon-check | moon-next");
        }
        Screen::NakshatraVillage => {
            println!("Nakshatra Village: map | visit <n> | answer <n> | next | leave");
        }
        Screen::BirthMap => {
            println!("Birth Sky Map: chart <date> <time> <place>");
        }
        Screen::ParentMode => {
            println!("Parent Mode: fact");
        }
    }
}

fn print_status(session: &Session) {
    let name = if session.player.name.is_empty() {
        "Sky Detective"
    } else {
        &session.player.name
    };
    println!();
    println!("--- {} | {} shards ---", name, session.player.shards);
    println!(
        "  Sky Playground: {}/{} planets placed",
        session.orbit.placed().count(),
        session.orbit.placed().count() + session.orbit.available().count()
    );
    println!(
        "  Earth Lab: {} ({}), score {}",
        session.seasons.month_label(),
        session.seasons.season().name(),
        session.seasons.score
    );
    println!("  Eclipse Theater: score {}", session.eclipse.score);
    println!(
        "  Moon Lab: day {:.1} ({}), score {}",
        session.moon.day(),
        session.moon.phase().name(),
        session.moon.score
    );
    let (solved, total) = session.nakshatra.progress();
    println!("  Nakshatra Village: {}/{} mansions", solved, total);
    for entry in session.action_log.iter().rev().take(5) {
        println!("  log: {}", entry.message);
    }
    println!();
}

fn handle_sky(session: &mut Session, cmd: &str, rest: &str) {
    match cmd {
        "list" => {
            for planet in session.orbit.available() {
                println!("  {} {} - {}", planet.icon, planet.name, planet.description);
            }
            if let Some(mission) = session.orbit.mission() {
                println!("Mission: find the {}.", mission.name);
            }
        }
        "pick" => match session.orbit.select(&rest.to_lowercase()) {
            SelectOutcome::Staged => {
                if let Some(planet) = session.orbit.staged() {
                    println!("{} {} - {}", planet.icon, planet.name, planet.fun_fact);
                    println!("Type `place` to collect 50 shards and launch it.");
                }
            }
            SelectOutcome::Miss => println!("{}", session.orbit.feedback),
            SelectOutcome::AlreadyPlaced => println!("That planet is already in orbit."),
            SelectOutcome::Unknown => println!("No planet called '{}'.", rest),
        },
        "place" => {
            let Session { orbit, player, .. } = session;
            if orbit.confirm_placement(player) {
                let message = orbit.feedback.clone();
                println!("{}", message);
                session.log(message, LogCategory::Reward);
            } else {
                println!("Nothing staged. Pick the mission planet first.");
            }
        }
        "reset" => {
            session.orbit.reset();
            println!("{}", session.orbit.feedback);
        }
        _ => print_help(Screen::SkyPlayground),
    }
}

fn handle_zodiac(session: &mut Session, cmd: &str, rest: &str) {
    match cmd {
        "list" => {
            for sign in ZODIAC_SIGNS {
                println!(
                    "  {} {} ({}) - {} sign",
                    sign.symbol,
                    sign.name,
                    sign.sanskrit_name,
                    sign.element.name()
                );
            }
        }
        "info" => match cosmic_quest::data::zodiac::sign(&rest.to_lowercase()) {
            Some(sign) => {
                println!("{} {} - {}", sign.symbol, sign.name, sign.description);
                println!("  Guardian: {} | Traits: {}", sign.guardian, sign.traits.join(", "));
                println!(
                    "  Brightest star: {} | Best viewing: {}",
                    sign.brightest_star, sign.best_viewing_season
                );
                println!("  Sky fact: {}", sign.astronomy_fact);
            }
            None => println!("No sign called '{}'.", rest),
        },
        "trace" => match session.zodiac.start_trace(&rest.to_lowercase()) {
            Some(sign) => println!(
                "Tracing {}: tap stars 0..{} in order.",
                sign.name,
                sign.constellation_stars.len() - 1
            ),
            None => println!("No sign called '{}'.", rest),
        },
        "tap" => {
            let Ok(star) = rest.parse::<usize>() else {
                println!("Usage: tap <star number>");
                return;
            };
            let Session { zodiac, player, .. } = session;
            match zodiac.tap_star(star, player) {
                TraceOutcome::Advanced => println!("A golden line appears!"),
                TraceOutcome::Completed => {
                    println!("Constellation Complete! +20 Shards");
                    session.log("Constellation traced (+20)".to_string(), LogCategory::Reward);
                }
                TraceOutcome::AlreadyCompleted => println!("Already traced - beautiful, isn't it?"),
                TraceOutcome::Ignored => println!("Tap the pulsing star (the next one in order)."),
                TraceOutcome::NotTracing => println!("Start with `trace <sign>`."),
            }
        }
        "quiz" => match session.zodiac.start_trivia(&rest.to_lowercase()) {
            Some(sign) => {
                println!("{}", sign.trivia.question);
                for (i, option) in sign.trivia.options.iter().enumerate() {
                    println!("  {}: {}", i, option);
                }
            }
            None => println!("No sign called '{}'.", rest),
        },
        "answer" => {
            let Ok(option) = rest.parse::<usize>() else {
                println!("Usage: answer <option number>");
                return;
            };
            let Session { zodiac, player, .. } = session;
            match zodiac.answer_trivia(option, player) {
                TriviaOutcome::Correct { credited: true } => {
                    println!("Correct! You are a genius! +10 Shards");
                    session.log("Zodiac trivia solved (+10)".to_string(), LogCategory::Reward);
                }
                TriviaOutcome::Correct { credited: false } => {
                    println!("Correct again - but the shards were already yours.")
                }
                TriviaOutcome::Wrong => println!("Oops! Good try though!"),
                TriviaOutcome::AlreadyAnswered => println!("That question is locked in."),
                TriviaOutcome::NotAsking => println!("Start with `quiz <sign>`."),
            }
        }
        _ => print_help(Screen::ZodiacRealms),
    }
}

fn handle_planets(session: &mut Session, cmd: &str, rest: &str) {
    match cmd {
        "grahas" => {
            for graha in NAVAGRAHAS {
                println!(
                    "  {} {} ({}) - {}",
                    graha.icon, graha.name, graha.sanskrit_name, graha.description
                );
            }
        }

        // Earth Lab
        "month" => match rest.parse::<f64>() {
            Ok(month) => {
                session.seasons.set_month(month);
                let season = session.seasons.season();
                println!(
                    "{}: {} - {}",
                    session.seasons.month_label(),
                    season.name(),
                    season.description()
                );
            }
            Err(_) => println!("Usage: month <0-11.9>"),
        },
        "orbit" => {
            session.seasons.playing = !session.seasons.playing;
            println!(
                "Auto-orbit {}.",
                if session.seasons.playing { "running (each command advances it)" } else { "paused" }
            );
        }
        "game" => {
            let mut rng = rand::thread_rng();
            session.seasons.start_game(&mut rng);
            if let Some(item) = session.seasons.target() {
                println!("Find this season: {} {}", item.icon, item.name);
            }
        }
        "submit" => {
            let Session { seasons, player, .. } = session;
            match seasons.submit(player) {
                MatchOutcome::Correct => {
                    let message = seasons.feedback.clone();
                    println!("{}", message);
                    session.log(message, LogCategory::Reward);
                    let mut rng = rand::thread_rng();
                    session.seasons.next_round(&mut rng);
                    if let Some(item) = session.seasons.target() {
                        println!("Next up: {} {}", item.icon, item.name);
                    }
                }
                MatchOutcome::AlreadySolved => println!("Round already solved - a new item is coming."),
                MatchOutcome::Wrong => println!("{}", session.seasons.feedback),
                MatchOutcome::Inactive => println!("Start the season game with `game` first."),
            }
        }

        // Eclipse Theater
        "eclipse-angle" => match rest.parse::<f64>() {
            Ok(angle) => {
                session.eclipse.angle = angle;
                println!("Moon rotated to {:.0} degrees.", angle);
            }
            Err(_) => println!("Usage: eclipse-angle <degrees>"),
        },
        "eclipse-check" => {
            if let Some(level) = session.eclipse.current_level() {
                println!("{}: {}", level.title, level.instruction);
            }
            if session.eclipse.check_alignment() {
                println!("{}", session.eclipse.feedback);
                if let Some(level) = session.eclipse.current_level() {
                    println!("{}", level.quiz.question);
                    for (i, option) in level.quiz.options.iter().enumerate() {
                        println!("  {}: {}", i, option);
                    }
                }
            } else {
                println!("{}", session.eclipse.feedback);
            }
        }
        "eclipse-answer" => {
            let Ok(option) = rest.parse::<usize>() else {
                println!("Usage: eclipse-answer <option number>");
                return;
            };
            let Session { eclipse, player, .. } = session;
            match eclipse.answer(option, player) {
                QuizOutcome::Correct => {
                    let message = eclipse.feedback.clone();
                    println!("{}", message);
                    session.log(message, LogCategory::Reward);
                    println!("Type `eclipse-next` for the next level.");
                }
                QuizOutcome::AlreadySolved => println!("Level already solved - on to `eclipse-next`!"),
                QuizOutcome::Wrong => println!("{}", session.eclipse.feedback),
                QuizOutcome::NotOpen => println!("Align the moon first with `eclipse-check`."),
            }
        }
        "eclipse-next" => {
            session.eclipse.next_level();
            match session.eclipse.current_level() {
                Some(level) => println!("{}: {}", level.title, level.instruction),
                None => println!("Eclipse Master! You understand how shadows create eclipses."),
            }
        }

        // Moon Lab
        "day" => match rest.parse::<f64>() {
            Ok(day) => {
                session.moon.set_day(day);
                println!(
                    "Day {:.1}: {} ({}% lit)",
                    session.moon.day(),
                    session.moon.phase().name(),
                    session.moon.lit_percent()
                );
            }
            Err(_) => println!("Usage: day <0-29.5>"),
        },
        "moon-check" => {
            if let Some(level) = session.moon.current_level() {
                println!("Mission {}: find the {}. Hint: {}", level.id, level.target_phase.name(), level.hint);
            }
            let Session { moon, player, .. } = session;
            match moon.check(player) {
                CheckOutcome::Correct => {
                    let message = moon.feedback.clone();
                    println!("{}", message);
                    session.log(message, LogCategory::Reward);
                    if let Some(level) = session.moon.current_level() {
                        println!("{} Type `moon-next` to continue.", level.fact);
                    }
                }
                CheckOutcome::AlreadySolved => println!("Already solved - `moon-next` awaits."),
                CheckOutcome::Miss => println!("{}", session.moon.feedback),
                CheckOutcome::Finished => println!("Moon Master! You have mastered all the phases."),
            }
        }
        "moon-next" => {
            session.moon.next_level();
            match session.moon.current_level() {
                Some(level) => println!("Mission {}: find the {}.", level.id, level.target_phase.name()),
                None => println!("Moon Master! You have mastered all the phases."),
            }
        }
        _ => print_help(Screen::PlanetWorlds),
    }
}

fn handle_village(session: &mut Session, cmd: &str, rest: &str) {
    match cmd {
        "map" => {
            let (solved, total) = session.nakshatra.progress();
            println!("Progress: {} / {} unlocked", solved, total);
            for (i, star) in NAKSHATRAS.iter().enumerate() {
                let marker = if session.nakshatra.is_solved(i) {
                    "solved"
                } else if session.nakshatra.is_unlocked(i) {
                    "open"
                } else {
                    "locked"
                };
                println!("  {}: {} ({}) [{}]", i, star.name, star.meaning, marker);
            }
        }
        "visit" => {
            let Ok(index) = rest.parse::<usize>() else {
                println!("Usage: visit <mansion number>");
                return;
            };
            match session.nakshatra.visit(index) {
                Some(star) => {
                    println!("{} - {}", star.name, star.meaning);
                    println!("  Deity: {} | Animal: {} | Symbol: {}", star.deity, star.animal, star.symbol);
                    println!("Star Challenge: {}", star.task.question);
                    for (i, option) in star.task.options.iter().enumerate() {
                        println!("  {}: {}", i, option);
                    }
                }
                None => println!("That star is still locked. Solve the open one first!"),
            }
        }
        "answer" => {
            let Ok(option) = rest.parse::<usize>() else {
                println!("Usage: answer <option number>");
                return;
            };
            let Session { nakshatra, player, .. } = session;
            match nakshatra.answer(option, player) {
                TaskOutcome::Correct => {
                    println!("Level Complete! +30 Shards. The next star is open.");
                    session.log("Nakshatra solved (+30)".to_string(), LogCategory::Reward);
                }
                TaskOutcome::AlreadySolved => println!("{}", session.nakshatra.feedback),
                TaskOutcome::Wrong => println!("{}", session.nakshatra.feedback),
                TaskOutcome::NotVisiting => println!("Visit a mansion first with `visit <n>`."),
            }
        }
        "next" => match session.nakshatra.next() {
            Some(star) => println!("Travelling to {}... ({})", star.name, star.meaning),
            None => println!("No further star is open yet."),
        },
        "leave" => {
            session.nakshatra.leave();
            println!("Back to the village map.");
        }
        _ => print_help(Screen::NakshatraVillage),
    }
}

fn handle_birth(
    session: &mut Session,
    rt: &Runtime,
    llm: Option<&LlmClient>,
    cmd: &str,
    rest: &str,
) {
    if cmd != "chart" {
        print_help(Screen::BirthMap);
        return;
    }
    let mut parts = rest.splitn(3, ' ');
    let (Some(date), Some(time), Some(place)) = (parts.next(), parts.next(), parts.next()) else {
        println!("Usage: chart <date> <time> <place>  (e.g. chart 2015-06-01 12:00 Mumbai)");
        return;
    };

    println!("Reading the stars...");
    let card = rt.block_on(oracle::generate_birth_chart_summary(llm, date, time, place));
    if card.is_fallback() {
        session.log("Birth chart fell back to offline card".to_string(), LogCategory::System);
    }
    let summary = card.value;
    println!();
    println!("=== Cosmic Identity Card ===");
    println!("  Sun Sign:      {} (Your Core Self)", summary.sun_sign);
    println!("  Moon Sign:     {} (Your Emotions)", summary.moon_sign);
    println!("  Ascendant:     {} (Your Style)", summary.ascendant);
    println!("  Lucky Element: {}", summary.lucky_element);
    println!("  Power Planet:  {}", summary.power_planet);
    println!("  \"{}\"", summary.kid_summary);
}

fn handle_parent(rt: &Runtime, llm: Option<&LlmClient>, cmd: &str) {
    if cmd != "fact" {
        print_help(Screen::ParentMode);
        return;
    }
    println!("Loading your daily sky fact...");
    let fact = rt.block_on(oracle::daily_sky_fact(llm));
    println!("Daily Sky Fact: \"{}\"", fact.value);
    println!("All birth data stays on this device. Edutainment only - no real predictions.");
}
