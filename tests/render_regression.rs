use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

fn compute_file_hash(file_path: &Path) -> Result<String, io::Error> {
    let mut file = File::open(file_path)?;
    let mut hasher = Sha256::new();
    let mut buffer = Vec::new();

    file.read_to_end(&mut buffer)?;

    hasher.update(&buffer);

    let result = hasher.finalize();
    Ok(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::compute_file_hash;
    use mandelbrot_scatter::cli::render::{render_scatter_plot, ScatterParams};
    use mandelbrot_scatter::core::file_io::FilePrefix;
    use mandelbrot_scatter::core::render::ScatterImageParams;
    use std::path::PathBuf;

    fn test_params(workers: Option<usize>) -> ScatterParams {
        ScatterParams {
            side: 2.5,
            center: nalgebra::Vector2::new(-0.5, 0.0),
            dens: 120,
            checks: 80,
            workers,
            image: ScatterImageParams {
                resolution: 128,
                marker_size: 1,
                background_color_rgb: [255, 255, 255],
                marker_color_rgb: [0, 0, 0],
            },
        }
    }

    fn render_into(directory: &str, params: &ScatterParams) -> PathBuf {
        let directory_path: PathBuf = ["out", "tests", directory].iter().collect();
        std::fs::create_dir_all(&directory_path).unwrap();
        let file_prefix = FilePrefix {
            directory_path,
            file_base: "result".to_owned(),
        };
        let render_path = file_prefix.with_suffix(".png");
        render_scatter_plot(params, file_prefix).unwrap();
        render_path
    }

    /// The whole pipeline is deterministic: rendering the same
    /// parameters twice must produce byte-identical images.
    #[test]
    fn test_repeat_render_is_byte_identical() {
        let params = test_params(None);
        let first = render_into("render_regression_a", &params);
        let second = render_into("render_regression_b", &params);

        assert_eq!(
            compute_file_hash(&first).unwrap(),
            compute_file_hash(&second).unwrap()
        );
    }

    /// Worker count changes the execution strategy, never the image.
    #[test]
    fn test_parallel_render_matches_sequential_render() {
        let sequential = render_into("render_regression_seq", &test_params(None));
        let parallel = render_into("render_regression_par", &test_params(Some(3)));

        assert_eq!(
            compute_file_hash(&sequential).unwrap(),
            compute_file_hash(&parallel).unwrap()
        );
    }
}
