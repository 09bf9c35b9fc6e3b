use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::{
    NativeOptions,
    egui::{self, ViewportBuilder},
};
use egui_extras::install_image_loaders;
use tracing::info;

use crate::api::RunReport;
use crate::error::{Error, Result};

const HEADER_HEIGHT: f32 = 48.0;

/// Window showing a saved comparison figure.
pub struct PlotViewer {
    pub image_path: PathBuf,
    pub image_uri: String,
    pub image_bytes: egui::load::Bytes,
    pub legend_lines: Vec<String>,
}

impl PlotViewer {
    pub fn new(report: &RunReport, bytes: Vec<u8>) -> Self {
        let legend_lines = report
            .files
            .iter()
            .map(|f| format!("{} [{}, {} samples]", f.path.display(), f.layout, f.samples))
            .collect();
        Self {
            image_path: report.output.clone(),
            image_uri: format!("bytes://{}", report.output.display()),
            image_bytes: egui::load::Bytes::Shared(Arc::from(bytes)),
            legend_lines,
        }
    }
}

impl eframe::App for PlotViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}", self.image_path.display()))
                        .monospace()
                        .strong(),
                );
                for line in &self.legend_lines {
                    ui.separator();
                    ui.label(egui::RichText::new(line).monospace().size(11.0));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.add(
                    egui::Image::from_bytes(self.image_uri.clone(), self.image_bytes.clone())
                        .shrink_to_fit(),
                );
            });
        });
    }
}

/// Block on a native window displaying the figure written for `report`.
pub fn show_plot(report: &RunReport) -> Result<()> {
    let path: &Path = &report.output;
    let bytes = std::fs::read(path)?;
    let (width, height) = image::image_dimensions(path).map_err(Error::external)?;
    info!("Opening viewer for {:?} ({}x{})", path, width, height);

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(format!("matcost - {}", path.display()))
            .with_inner_size([width as f32, height as f32 + HEADER_HEIGHT])
            .with_min_inner_size([400.0, 240.0]),
        ..Default::default()
    };

    let viewer = PlotViewer::new(report, bytes);
    eframe::run_native(
        "matcost",
        options,
        Box::new(|cc| {
            install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(viewer))
        }),
    )
    .map_err(Error::external)
}
