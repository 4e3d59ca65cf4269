use chrono::Local;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use clockface::clockface::{Face, Point};
use clockface::config::Config;
use clockface::post::Post;
use clockface::svg;
use clockface::time::TimeOfDay;
use std::error::Error;
use std::io::{self, Read, Write};
use tracing::info;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = app().get_matches();

    let result = match matches.subcommand() {
        ("face", Some(matches)) => face(matches),
        ("post", Some(matches)) => post(matches),
        _ => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("ERROR {}", e);
        std::process::exit(1);
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("clockface")
        .about("Draws clock faces and renders blog posts")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("face")
                .about("Writes an SVG clock face to stdout")
                .arg(config_arg())
                .arg(
                    Arg::with_name("time")
                        .long("time")
                        .takes_value(true)
                        .help("The time to draw as HH:MM:SS (defaults to now)"),
                )
                .arg(number_arg("centre-x", "The x coordinate of the centre"))
                .arg(number_arg("centre-y", "The y coordinate of the centre"))
                .arg(number_arg("radius", "The length of the second hand")),
        )
        .subcommand(
            SubCommand::with_name("post")
                .about("Renders a post read from stdin as an HTML page on stdout")
                .arg(config_arg()),
        )
}

fn config_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("config")
        .long("config")
        .takes_value(true)
        .help("Configuration as an inline YAML document")
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    Ok(Config::from_yaml(matches.value_of("config").unwrap_or(""))?)
}

fn number_arg<'a, 'b>(name: &'a str, help: &'b str) -> Arg<'a, 'b> {
    Arg::with_name(name).long(name).takes_value(true).help(help)
}

fn parse_number(matches: &ArgMatches, name: &str) -> Result<Option<f64>> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(|e| format!("--{}: {}", name, e).into()),
    }
}

// Command line flags take precedence over the configured face.
fn face_from(matches: &ArgMatches, config: Config) -> Result<Face> {
    let face = config.face;
    Ok(Face {
        centre: Point::new(
            parse_number(matches, "centre-x")?.unwrap_or(face.centre.x),
            parse_number(matches, "centre-y")?.unwrap_or(face.centre.y),
        ),
        second_hand_length: parse_number(matches, "radius")?
            .unwrap_or(face.second_hand_length),
        ..face
    })
}

fn face(matches: &ArgMatches) -> Result<()> {
    let t = match matches.value_of("time") {
        Some(s) => s
            .parse::<TimeOfDay>()
            .map_err(|e| format!("--time: {}", e))?,
        None => TimeOfDay::from(&Local::now()),
    };
    let face = face_from(matches, load_config(matches)?)?;

    info!(time = %t, "drawing clock face");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    svg::write(&mut out, &face, t)?;
    out.flush()?;
    Ok(())
}

fn post(matches: &ArgMatches) -> Result<()> {
    let renderer = load_config(matches)?.renderer()?;

    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    let post = Post::from_source(&source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer.render(&mut out, &post)?;
    out.flush()?;
    Ok(())
}
