use clap::Parser;
use eframe::NativeOptions;

use temp_horizon::config::PIPELINE;
use temp_horizon::{Cli, PipelineError, pipeline, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Run the Pipeline (Blocking)
    let outcome = match pipeline::run(&PIPELINE) {
        Ok(outcome) => outcome,
        Err(e) => {
            // Every failure kind prints its own descriptive line; the run
            // stops here with no figures.
            println!("{}", e);
            return Ok(());
        }
    };

    // D. Render the Figures
    if args.headless {
        log::info!("Headless run, skipping the figure window");
    } else {
        println!("\nPlotting forecast...");
        let options = NativeOptions::default();
        let result = eframe::run_native(
            "Temp Horizon - additive temperature forecast",
            options,
            Box::new(move |cc| Ok(run_app(cc, outcome))),
        );
        match result {
            // Last stage: a plot failure is reported but still falls through
            // to the finished message below.
            Err(e) => println!("{}", PipelineError::Plot(e.to_string())),
            Ok(()) => println!("Plots displayed. Close the window to continue."),
        }
    }

    println!("\nRun finished.");
    Ok(())
}
