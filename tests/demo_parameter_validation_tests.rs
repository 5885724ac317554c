#[cfg(test)]
mod tests {
    use glob::glob;
    use mandelbrot_scatter::cli::render::ScatterParams;
    use std::fs;

    /// Every parameter file shipped under `demos/` must parse into
    /// `ScatterParams`; a file that drifts from the schema fails here
    /// rather than at run time.
    #[test]
    fn test_ensure_all_demo_files_can_be_parsed() {
        let pattern = "demos/**/*.json";
        let mut file_count = 0;

        for entry in glob(pattern).expect("Failed to read glob pattern") {
            match entry {
                Ok(path) => {
                    let content = fs::read_to_string(&path)
                        .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));

                    let result: Result<ScatterParams, _> = serde_json::from_str(&content);

                    match result {
                        Ok(_) => file_count += 1,
                        Err(err) => {
                            panic!(
                                "Failed to parse JSON file: {:?} as `ScatterParams`.\n\n{:?}\n",
                                path, err
                            );
                        }
                    }
                }
                Err(e) => panic!("Failed to read path: {:?}. Check permissions.", e),
            }
        }

        assert!(file_count > 0, "No demo parameter files were found!");
    }
}
