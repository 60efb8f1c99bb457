use eframe::egui;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

use skeleton_draw::pointer::{PointerFrame, PointerRouter};
use skeleton_draw::{DrawCommand, EditorConfig, EditorSession, Mode, Point, Workspace};

const MODE_ON: egui::Color32 = egui::Color32::from_rgb(0, 160, 0);
const MODE_OFF: egui::Color32 = egui::Color32::from_rgb(190, 30, 30);

// ── App ─────────────────────────────────────────────────────────────────────

struct SkeletonApp {
    config: EditorConfig,
    workspace: Workspace,
    images: Vec<String>,
    selected: Option<usize>,

    background: Option<RgbaImage>,
    texture: Option<egui::TextureHandle>,

    session: EditorSession,
    pointer: PointerRouter,
}

impl SkeletonApp {
    fn new(config: EditorConfig) -> Self {
        let workspace = Workspace::new(&config);
        let images = workspace.list_images().unwrap_or_else(|e| {
            warn!(error = %e, dir = %workspace.input_dir().display(), "could not list images");
            Vec::new()
        });

        let mut session = EditorSession::new(config.style);
        session.load_default_skeleton();

        let mut app = Self {
            workspace,
            images,
            selected: None,
            background: None,
            texture: None,
            session,
            pointer: PointerRouter::default(),
            config,
        };
        if let Some(path) = app.config.initial_image.clone() {
            app.open_image(&path);
        }
        app
    }

    fn open_image(&mut self, path: &Path) {
        match self.workspace.load_image(path) {
            Ok(img) => {
                self.background = Some(img);
                self.texture = None;
            }
            Err(e) => warn!(error = %e, path = %path.display(), "could not open image"),
        }
    }

    fn open_with_dialog(&mut self) {
        let picked: Option<PathBuf> = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg"])
            .set_directory(self.workspace.input_dir())
            .pick_file();
        if let Some(path) = picked {
            self.selected = None;
            self.open_image(&path);
        }
    }

    fn save(&self) {
        let saved = self.workspace.save_flattened(
            self.background.as_ref(),
            self.session.skeleton(),
            &self.session.style,
        );
        if let Err(e) = saved {
            error!(error = %e, dir = %self.workspace.output_dir().display(), "export failed");
        }
    }

    fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_some() {
            return;
        }
        if let Some(ref img) = self.background {
            let size = [img.width() as usize, img.height() as usize];
            let pixels = img.as_flat_samples();
            let color_image =
                egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice());
            self.texture = Some(ctx.load_texture(
                "background",
                color_image,
                egui::TextureOptions::LINEAR,
            ));
        }
    }

    fn draw_skeleton(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let to_screen = |p: Point| origin + egui::vec2(p.x, p.y);
        for command in self.session.scene() {
            match command {
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    painter.line_segment(
                        [to_screen(from), to_screen(to)],
                        egui::Stroke::new(width, to_egui(color)),
                    );
                }
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => {
                    painter.circle_filled(to_screen(center), radius, to_egui(color));
                }
                DrawCommand::Label { pos, text, color } => {
                    painter.text(
                        to_screen(pos),
                        egui::Align2::CENTER_CENTER,
                        text,
                        egui::FontId::proportional(11.0),
                        to_egui(color),
                    );
                }
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            if ui.button("Reset Skeleton").clicked() {
                self.session.reset();
            }
            if ui.button("Add Skeleton").clicked() {
                self.session.load_default_skeleton();
            }
            if ui.button("Add Fingers").clicked() {
                self.session.add_fingers();
            }
            if ui.button("Open…").clicked() {
                self.open_with_dialog();
            }
            if ui.button("Save").clicked() {
                self.save();
            }
            if ui.button("Undo").clicked() {
                self.session.undo();
            }
            if ui.button("Exit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }

            ui.separator();
            ui.label("Line Thickness");
            ui.add(egui::Slider::new(
                &mut self.session.style.line_thickness,
                self.config.thickness_range.clone(),
            ));
            ui.label("Keypoint Size");
            ui.add(egui::Slider::new(
                &mut self.session.style.keypoint_radius,
                self.config.radius_range.clone(),
            ));

            ui.separator();
            let mode = self.session.mode();
            mode_indicator(ui, "Manual Mode", mode == Mode::ManualLine);
            if ui.button("Toggle Manual Mode").clicked() {
                self.session.toggle_manual_line();
            }
            mode_indicator(ui, "Delete Mode", mode == Mode::Delete);
            if ui.button("Toggle Delete Mode").clicked() {
                self.session.toggle_delete();
            }
        });
    }

    fn image_list(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (i, name) in self.images.iter().enumerate() {
                if ui.selectable_label(self.selected == Some(i), name).clicked() {
                    clicked = Some(i);
                }
            }
        });
        if let Some(i) = clicked {
            self.selected = Some(i);
            let path = self.workspace.input_path(&self.images[i]);
            self.open_image(&path);
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response) {
        let origin = response.rect.min;
        let frame = ctx.input(|i| PointerFrame {
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            moving: i.pointer.is_moving(),
            pos: i
                .pointer
                .interact_pos()
                .map(|pos| Point::new(pos.x - origin.x, pos.y - origin.y)),
            over_canvas: response.hovered(),
        });
        if self.pointer.route(&mut self.session, frame) {
            ctx.request_repaint();
        }
    }
}

fn to_egui(c: skeleton_draw::Color) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

fn mode_indicator(ui: &mut egui::Ui, text: &str, on: bool) {
    let fill = if on { MODE_ON } else { MODE_OFF };
    ui.label(
        egui::RichText::new(text)
            .color(egui::Color32::WHITE)
            .background_color(fill),
    );
}

// ── eframe App impl ────────────────────────────────────────────────────────

impl eframe::App for SkeletonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_texture(ctx);

        let (undo, save) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::Z),
                i.modifiers.command && i.key_pressed(egui::Key::S),
            )
        });
        if undo {
            self.session.undo();
        }
        if save {
            SkeletonApp::save(self);
        }

        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| self.controls(ui));

        egui::SidePanel::right("images")
            .resizable(false)
            .show(ctx, |ui| self.image_list(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let side = self.config.canvas_size as f32;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            painter.rect_filled(canvas_rect, 0.0, egui::Color32::BLACK);

            if let Some(ref tex) = self.texture {
                painter.image(
                    tex.id(),
                    canvas_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
                self.draw_skeleton(&painter, canvas_rect.min);
            }

            self.handle_pointer(ctx, &response);
        });
    }
}

// ── Main ────────────────────────────────────────────────────────────────────

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let config = EditorConfig::from_args(std::env::args());
    let side = config.canvas_size as f32;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 420.0, side + 40.0])
            .with_title("Skeleton Drawer"),
        ..Default::default()
    };

    eframe::run_native(
        "Skeleton Drawer",
        options,
        Box::new(move |_cc| Ok(Box::new(SkeletonApp::new(config)))),
    )
}
