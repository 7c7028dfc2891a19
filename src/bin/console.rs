use clap::{App, Arg};
use colored::*;
use obsbus::agent::ObservatoryAgent;
use obsbus::config::ControllerConfig;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let matches = App::new("obsbus-console")
        .version("0.1.0")
        .author("Observatory Systems Team")
        .about("Observatory instrument controller console (simulated bench)")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("PATH")
                .help("JSON configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("humidity-on")
                .long("humidity-on")
                .value_name("PCT")
                .help("Humidity above which the IR lamp is forced on")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("humidity-off")
                .long("humidity-off")
                .value_name("PCT")
                .help("Humidity below which the IR lamp is forced off")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-interlock")
                .long("no-interlock")
                .help("Disable the humidity/lamp interlock"),
        )
        .get_matches();

    let mut config = match matches.value_of("config") {
        Some(path) => ControllerConfig::load(Path::new(path))?,
        None => ControllerConfig::default(),
    };
    if let Some(value) = matches.value_of("humidity-on") {
        config.interlock.humidity_on_pct = value.parse()?;
    }
    if let Some(value) = matches.value_of("humidity-off") {
        config.interlock.humidity_off_pct = value.parse()?;
    }
    if matches.is_present("no-interlock") {
        config.interlock.enabled = false;
    }

    let mut agent = ObservatoryAgent::sim_bench(&config);

    println!("{}", "Observatory Instrument Controller".bright_blue().bold());
    println!("   Devices: camera / irlamp / backlight");
    println!("   Sensors: telescope temperatures, atmosphere, wind");
    if config.interlock.enabled {
        println!(
            "   Interlock: lamp on above {:.0}% RH, off below {:.0}% RH",
            config.interlock.humidity_on_pct, config.interlock.humidity_off_pct
        );
    } else {
        println!("   Interlock: {}", "disabled".yellow());
    }
    println!(
        "{}",
        "Ready for commands: camera, focuser, irlamp, status, temperatures, scani2c, backlight"
            .bright_green()
    );

    // One line is read and fully handled (including any focuser prompt
    // follow-up and the trailing display refresh) before the next.
    let mut lines = BufReader::new(tokio::io::stdin());
    let mut line = String::new();
    loop {
        line.clear();
        let read = lines.read_line(&mut line).await?;
        if read == 0 {
            break;
        }
        if let Some(reply) = agent.handle_line(&line) {
            println!("{}", reply.trim_end());
        }
    }

    Ok(())
}
