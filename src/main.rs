use anyhow::Result;
use env_logger::Env;
use thinfilm::problem::Problem;
use thinfilm::settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let settings = settings::load_config()?;
    let json = settings.json;
    let problem = Problem::new(settings);

    let optics = problem.solve();

    if json {
        println!("{}", serde_json::to_string_pretty(&optics)?);
    } else {
        print!("{}", optics);
    }

    Ok(())
}
