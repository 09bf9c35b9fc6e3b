use tracing::info;
use tracing_subscriber::EnvFilter;

use matcost::{PlotParams, RunReport, compare_files_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Config file (or defaults) with explicit flags applied on top.
pub fn resolve_params(args: &CliArgs) -> Result<PlotParams, AppError> {
    let mut params = match &args.config {
        Some(path) => PlotParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => PlotParams::default(),
    };

    if let Some(output) = &args.output {
        params.output = output.clone();
    }
    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(nnz_source) = args.nnz_source {
        params.nnz_source = nnz_source;
    }
    if let Some(geometry) = args.geometry {
        params.geometry = geometry;
    }
    if args.no_show {
        params.show = false;
    }

    Ok(params)
}

#[cfg(feature = "gui")]
fn show(report: &RunReport) -> Result<(), AppError> {
    matcost::gui::show_plot(report)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn show(report: &RunReport) -> Result<(), AppError> {
    eprintln!(
        "GUI feature is not enabled; figure saved to {} (build with --features gui to view)",
        report.output.display()
    );
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = resolve_params(&args)?;
    info!(
        "Comparing {} file(s): nnz={}, geometry={}, output={:?}",
        args.files.len(),
        params.nnz_source,
        params.geometry,
        params.output
    );

    let report = compare_files_to_path(&args.files, &params)?;
    for file in &report.files {
        info!(
            "{:?}: {} model, {} samples",
            file.path, file.layout, file.samples
        );
    }

    if params.show {
        show(&report)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use matcost::{Geometry, NnzSource};
    use std::io::Write;
    use std::path::PathBuf;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_files_are_required() {
        assert!(CliArgs::try_parse_from(["matcost"]).is_err());
    }

    #[test]
    fn test_files_keep_order() {
        let args = parse(&["matcost", "b_csr_X_csr.csv", "a_dense_X_dense.csv"]);
        assert_eq!(
            args.files,
            vec![
                PathBuf::from("b_csr_X_csr.csv"),
                PathBuf::from("a_dense_X_dense.csv")
            ]
        );
    }

    #[test]
    fn test_defaults_without_flags() {
        let params = resolve_params(&parse(&["matcost", "csr_X_dense.csv"])).unwrap();
        assert_eq!(params, PlotParams::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&[
            "matcost",
            "csr_X_dense.csv",
            "-o",
            "out.png",
            "--width",
            "640",
            "--nnz-source",
            "recorded",
            "--geometry",
            "rectangular",
            "--no-show",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.output, PathBuf::from("out.png"));
        assert_eq!(params.width, 640);
        assert_eq!(params.height, 500);
        assert_eq!(params.nnz_source, NnzSource::Recorded);
        assert_eq!(params.geometry, Geometry::Rectangular);
        assert!(!params.show);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        write!(
            config,
            r#"{{"output": "from_config.png", "height": 900, "show": false}}"#
        )
        .unwrap();
        let config_path = config.path().to_str().unwrap().to_string();

        let args = parse(&[
            "matcost",
            "csr_X_dense.csv",
            "--config",
            &config_path,
            "--height",
            "700",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.output, PathBuf::from("from_config.png"));
        assert_eq!(params.height, 700);
        assert!(!params.show);
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let args = parse(&[
            "matcost",
            "csr_X_dense.csv",
            "--config",
            "/definitely/not/here.json",
        ]);
        let err = resolve_params(&args).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn test_unknown_layout_message() {
        let args = parse(&["matcost", "run_unknown_X_unknown.csv", "--no-show"]);
        let err = run(args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No formula defined for file run_unknown_X_unknown.csv"
        );
    }
}
