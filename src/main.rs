use mandelbrot_scatter::core::file_io::{
    build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix,
};

use clap::Parser;
use mandelbrot_scatter::cli::args::{CommandsEnum, MandelbrotScatterArgs};
use mandelbrot_scatter::cli::render::{render_scatter_plot, ScatterParams};

fn main() {
    let args: MandelbrotScatterArgs = MandelbrotScatterArgs::parse();

    let scatter_params = |path: &str| -> ScatterParams {
        serde_json::from_str(&std::fs::read_to_string(path).expect("Unable to read param file"))
            .unwrap()
    };

    match &args.command {
        Some(CommandsEnum::Render(params)) => {
            let file_prefix = FilePrefix {
                directory_path: build_output_path_with_date_time(
                    &params.params_path,
                    "render",
                    &maybe_date_time_string(params.date_time_out),
                ),
                file_base: extract_base_name(&params.params_path).to_owned(),
            };

            render_scatter_plot(&scatter_params(&params.params_path), file_prefix).unwrap();
        }
        None => {
            println!("Default command (nothing specified!)");
        }
    }
}
