//! Pipeline Player GUI
//! Interactive auto-advancing diagram of the task generation pipeline

use eframe::egui;
use std::time::{Duration, Instant};

mod config;
mod graph;
mod layout;
mod pipeline;
mod player;
mod render;

use config::PlayerConfig;
use graph::Diagram;
use player::Player;
use render::{EdgeShape, NodeShape};

const CANVAS_BG: egui::Color32 = egui::Color32::from_rgb(25, 28, 32);
const NODE_FILL: egui::Color32 = egui::Color32::from_rgb(40, 55, 75);
const NODE_BORDER: egui::Color32 = egui::Color32::from_rgb(100, 120, 145);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
const ACCENT_GLOW: egui::Color32 = egui::Color32::from_rgb(120, 85, 20);
const NEUTRAL: egui::Color32 = egui::Color32::from_rgb(130, 140, 155);
const TEXT: egui::Color32 = egui::Color32::from_rgb(235, 240, 248);
const TEXT_SOFT: egui::Color32 = egui::Color32::from_rgb(185, 200, 220);
const MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
const TOOLTIP_BG: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);

fn app_icon() -> egui::IconData {
    // Simple generated icon (64x64): three pipeline stages on a dark
    // background. Avoids external assets and works cross-platform.
    let w: u32 = 64;
    let h: u32 = 64;
    let mut rgba = vec![0u8; (w * h * 4) as usize];

    let boxes = [
        (6u32, 34u32, 20u32, 48u32, [56u8, 189u8, 248u8]),
        (24, 22, 40, 40, [245, 158, 11]),
        (44, 30, 58, 46, [251, 113, 133]),
    ];

    for y in 0..h {
        for x in 0..w {
            let mut px = [22u8, 26, 32, 255];

            // Connecting spine behind the stage boxes.
            if (30..=33).contains(&y) && (8..=56).contains(&x) {
                px = [90, 100, 115, 255];
            }

            for &(x0, y0, x1, y1, color) in &boxes {
                if (x0..=x1).contains(&x) && (y0..=y1).contains(&y) {
                    let on_border = x == x0 || x == x1 || y == y0 || y == y1;
                    px = if on_border {
                        [240, 244, 250, 255]
                    } else {
                        [color[0], color[1], color[2], 255]
                    };
                }
            }

            let idx = ((y * w + x) * 4) as usize;
            rgba[idx..idx + 4].copy_from_slice(&px);
        }
    }

    egui::IconData {
        rgba,
        width: w,
        height: h,
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = PlayerConfig::from_pairs(args.iter().filter_map(|arg| arg.split_once('=')));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1260.0, 950.0])
            .with_title("Pipeline Player")
            .with_icon(app_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Pipeline Player",
        options,
        Box::new(|cc| Ok(Box::new(PipelinePlayerApp::new(cc, config)))),
    )
}

struct PipelinePlayerApp {
    /// The compiled-in diagram, validated at startup
    diagram: Diagram,
    /// Host configuration (width cap and asset paths)
    config: PlayerConfig,
    /// Playback state machine
    player: Player,
    /// Previous frame timestamp feeding the tick timer
    last_frame: Option<Instant>,
}

impl PipelinePlayerApp {
    fn new(cc: &eframe::CreationContext<'_>, config: PlayerConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let diagram = pipeline::task_pipeline();
        if let Err(errors) = diagram.validate() {
            for error in &errors {
                log::error!("{error}");
            }
            panic!("built-in diagram failed validation");
        }

        let player = Player::new(diagram.steps.len(), &config);
        Self {
            diagram,
            config,
            player,
            last_frame: None,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Leave the keys alone while a widget (the speed slider) has focus.
        if ctx.wants_keyboard_input() {
            return;
        }
        let (toggle, forward, back) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });
        if toggle {
            self.player.toggle_play();
        }
        if forward {
            self.player.step_forward();
        }
        if back {
            self.player.step_back();
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("⏮").on_hover_text("Step back [←]").clicked() {
                self.player.step_back();
            }
            let play_label = if self.player.is_playing() { "⏸" } else { "▶" };
            if ui.button(play_label).on_hover_text("Play/Pause [Space]").clicked() {
                self.player.toggle_play();
            }
            if ui.button("⏭").on_hover_text("Step forward [→]").clicked() {
                self.player.step_forward();
            }
            if ui.button("↺ Reset").clicked() {
                self.player.reset();
            }

            ui.separator();

            ui.colored_label(ACCENT, "●");
            ui.label(render::legend(self.player.step(), self.diagram.steps.len()));

            ui.separator();

            ui.label("Speed");
            let mut speed = self.player.speed_ms();
            let response = ui.add(
                egui::Slider::new(&mut speed, player::SPEED_RANGE)
                    .step_by(200.0)
                    .suffix(" ms"),
            );
            if response.changed() {
                self.player.set_speed(speed);
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let mut container_w = ui.available_width();
        if let Some(cap) = self.config.width {
            container_w = container_w.min(cap);
        }
        self.player.rescale(container_w);
        let scale = self.player.scale();

        let size = egui::vec2(layout::LOGICAL_W * scale, layout::scaled_height(scale));
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let origin = response.rect.min.to_vec2();

        painter.rect_filled(response.rect, egui::Rounding::same(10.0), CANVAS_BG);

        let scene = render::build_scene(&self.diagram, &self.config.assets, &self.player);

        // Connectors first so node boxes cover them.
        for edge in &scene.edges {
            draw_edge(&painter, edge, origin);
        }
        for node in &scene.nodes {
            draw_node(ui, &painter, node, origin);
        }

        // Transient tooltip, anchored to the pointer, above everything.
        if let Some(pointer) = response.hover_pos() {
            let hovered = scene
                .nodes
                .iter()
                .rev()
                .find(|shape| shape.rect.translate(origin).contains(pointer));
            if let Some(tooltip) = hovered.and_then(|shape| shape.node.tooltip.as_deref()) {
                draw_tooltip(&painter, pointer, tooltip);
            }
        }
    }
}

impl eframe::App for PipelinePlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Frame delta feeds the tick timer.
        let now = Instant::now();
        let dt = self.last_frame.map(|last| now - last).unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        self.player.advance(dt);

        self.handle_keys(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Task Generation Pipeline");
            self.controls(ui);

            let narration = self.diagram.steps[self.player.step()].text.as_str();
            ui.label(egui::RichText::new(narration).color(MUTED));
            ui.separator();

            self.canvas(ui);
        });

        // eframe only repaints on input by default; autoplay needs frames
        // while the timer is running.
        if self.player.is_playing() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

fn draw_edge(painter: &egui::Painter, edge: &EdgeShape, origin: egui::Vec2) {
    let (color, width) = if edge.active { (ACCENT, 4.0) } else { (NEUTRAL, 2.0) };

    let points = edge.curve.map(|p| p + origin);
    painter.add(egui::epaint::CubicBezierShape::from_points_stroke(
        points,
        false,
        egui::Color32::TRANSPARENT,
        egui::Stroke::new(width, color),
    ));

    let arrow = edge.arrow.map(|p| p + origin).to_vec();
    painter.add(egui::Shape::convex_polygon(arrow, color, egui::Stroke::NONE));
}

fn draw_node(ui: &mut egui::Ui, painter: &egui::Painter, shape: &NodeShape<'_>, origin: egui::Vec2) {
    let node = shape.node;
    let rect = shape.rect.translate(origin);
    let rounding = egui::Rounding::same(10.0);

    painter.rect_filled(rect, rounding, NODE_FILL);

    let border = if shape.active {
        // Glow ring behind the accent border.
        painter.rect_stroke(rect.expand(3.0), rounding, egui::Stroke::new(5.0, ACCENT_GLOW));
        ACCENT
    } else {
        node.color.unwrap_or(NODE_BORDER)
    };
    let stroke = egui::Stroke::new(2.0, border);
    if node.dashed {
        draw_dashed_rect(painter, rect, stroke);
    } else {
        painter.rect_stroke(rect, rounding, stroke);
    }

    // Content is clipped to the box so small scales degrade gracefully.
    let content = painter.with_clip_rect(rect.shrink(2.0));
    let pad = 10.0;

    let mut text_x = rect.left() + pad;
    if let Some(icon) = shape.icon {
        let icon_rect = egui::Rect::from_min_size(
            egui::pos2(rect.left() + pad, rect.top() + pad),
            egui::vec2(40.0, 40.0),
        );
        egui::Image::from_uri(asset_uri(icon)).paint_at(ui, icon_rect);
        text_x = icon_rect.right() + 8.0;
    }
    if let Some(logo) = shape.logo {
        let logo_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - pad - 28.0, rect.top() + pad),
            egui::vec2(28.0, 28.0),
        );
        egui::Image::from_uri(asset_uri(logo)).paint_at(ui, logo_rect);
    }

    content.text(
        egui::pos2(text_x, rect.top() + pad),
        egui::Align2::LEFT_TOP,
        &node.title,
        egui::FontId::proportional(15.0),
        TEXT,
    );
    let mut line_y = rect.top() + pad + 19.0;
    if let Some(subtitle) = &node.subtitle {
        content.text(
            egui::pos2(text_x, line_y),
            egui::Align2::LEFT_TOP,
            subtitle,
            egui::FontId::proportional(12.0),
            MUTED,
        );
        line_y += 16.0;
    }

    if !node.bullets.is_empty() {
        let header_bottom = if shape.icon.is_some() {
            line_y.max(rect.top() + pad + 40.0)
        } else {
            line_y
        };
        let mut y = header_bottom + 6.0;
        for bullet in &node.bullets {
            content.text(
                egui::pos2(rect.left() + pad + 4.0, y),
                egui::Align2::LEFT_TOP,
                format!("• {bullet}"),
                egui::FontId::proportional(12.0),
                TEXT_SOFT,
            );
            y += 15.0;
        }
    }
}

fn draw_dashed_rect(painter: &egui::Painter, rect: egui::Rect, stroke: egui::Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for side in corners.windows(2) {
        painter.extend(egui::Shape::dashed_line(side, stroke, 6.0, 4.0));
    }
}

fn draw_tooltip(painter: &egui::Painter, pointer: egui::Pos2, text: &str) {
    let galley = painter.layout(
        text.to_owned(),
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
        360.0,
    );
    let pad = egui::vec2(9.0, 7.0);
    let size = galley.size() + pad * 2.0;
    let rect = egui::Rect::from_min_size(
        pointer + egui::vec2(-size.x / 2.0, -size.y - 12.0),
        size,
    );
    painter.rect_filled(rect, egui::Rounding::same(7.0), TOOLTIP_BG);
    painter.galley(rect.min + pad, galley, egui::Color32::WHITE);
}

fn asset_uri(path: &str) -> String {
    if path.contains("://") {
        path.to_string()
    } else {
        format!("file://{path}")
    }
}
