use bevy::prelude::*;
use bevy_egui::egui::scroll_area::ScrollSource;
use bevy_egui::{EguiContexts, egui};

use super::PanelConfig;
use super::entities::{Block, PanelAnchors, PanelNav, ResumeContent, Section, SwipeDirection};
use crate::camera::ShowcaseCamera;
use crate::intro::{ContentReady, RevealSequencer, RevealState};
use crate::model::ScreenSurface;
use crate::scene::PortfolioScene;

/// Every fresh reveal starts on the first section.
pub fn reset_on_content_ready(mut ready: MessageReader<ContentReady>, mut nav: ResMut<PanelNav>) {
    for msg in ready.read() {
        debug!("panel navigation reset for {}", msg.scene);
        nav.reset();
    }
}

/// Arrow keys page through the sections once the content is visible.
pub fn keyboard_navigation(
    keys: Res<ButtonInput<KeyCode>>,
    content: Res<ResumeContent>,
    scenes: Query<&RevealSequencer, With<PortfolioScene>>,
    mut nav: ResMut<PanelNav>,
) {
    let Ok(sequencer) = scenes.single() else {
        return;
    };
    if !sequencer.content_visible() {
        return;
    }
    let len = content.sections.len();
    if keys.just_pressed(KeyCode::ArrowRight) {
        nav.step(SwipeDirection::Next, len);
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        nav.step(SwipeDirection::Previous, len);
    }
}

/// Projects the panel onto the screen mesh and draws it.
///
/// Nothing is drawn until the sequencer has asked for the panel and the
/// model's screen surface exists.
pub fn draw_panel(
    mut contexts: EguiContexts,
    cfg: Res<PanelConfig>,
    content: Res<ResumeContent>,
    mut nav: ResMut<PanelNav>,
    scenes: Query<&RevealSequencer, With<PortfolioScene>>,
    screens: Query<&GlobalTransform, With<ScreenSurface>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<ShowcaseCamera>>,
) {
    let Ok(sequencer) = scenes.single() else {
        return;
    };
    if !sequencer.show_screen() {
        return;
    }
    let Some(screen) = screens.iter().next() else {
        return;
    };
    let Ok((camera, cam_gt)) = camera_q.single() else {
        return;
    };
    let anchors = PanelAnchors::on_screen(screen, &cfg);
    let (Ok(center), Ok(right), Ok(top)) = (
        camera.world_to_viewport(cam_gt, anchors.center),
        camera.world_to_viewport(cam_gt, anchors.right),
        camera.world_to_viewport(cam_gt, anchors.top),
    ) else {
        return;
    };
    let size = egui::vec2(2.0 * center.distance(right), 2.0 * center.distance(top));
    if size.x < 1.0 || size.y < 1.0 {
        return;
    }
    let rect = egui::Rect::from_center_size(egui::pos2(center.x, center.y), size);
    let zoom = size.x / cfg.layout_size.x;

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    egui::Area::new(egui::Id::new("portfolio_screen"))
        .fixed_pos(rect.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.set_min_size(size);
            ui.set_max_size(size);
            match sequencer.state() {
                RevealState::Animating => {}
                // Mounted but hidden while the layout settles.
                RevealState::AnimationComplete => {
                    ui.allocate_space(size);
                }
                RevealState::Ready => {
                    ui.set_opacity(sequencer.panel_opacity());
                    draw_screen(ui, rect, zoom, &content, &mut nav, cfg.swipe_threshold);
                }
            }
        });
}

fn px_u8(v: f32) -> u8 {
    v.round().clamp(0.0, u8::MAX as f32) as u8
}

fn px_i8(v: f32) -> i8 {
    v.round().clamp(0.0, i8::MAX as f32) as i8
}

fn accent(section: &Section) -> egui::Color32 {
    let [r, g, b] = section.accent;
    egui::Color32::from_rgb(r, g, b)
}

fn draw_screen(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    zoom: f32,
    content: &ResumeContent,
    nav: &mut PanelNav,
    swipe_threshold: f32,
) {
    let len = content.sections.len();
    let Some(section) = content.sections.get(nav.current) else {
        return;
    };

    ui.painter()
        .rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_rgb(0x1a, 0x1a, 0x2e));

    // Text selection would claim drags meant for the swipe.
    ui.style_mut().interaction.selectable_labels = false;

    // ── Swipe (registered first so buttons stay on top) ──
    let swipe = ui.interact(rect, egui::Id::new("portfolio_swipe"), egui::Sense::drag());
    if swipe.drag_started()
        && let Some(origin) = ui.input(|i| i.pointer.press_origin())
    {
        // egui reports the drag only after the pointer has moved a little.
        nav.swipe.press(Vec2::new(origin.x, origin.y));
    }
    let pointer = swipe
        .interact_pointer_pos()
        .or_else(|| ui.ctx().pointer_latest_pos())
        .map(|p| Vec2::new(p.x, p.y));
    if let Some(pos) = pointer {
        if swipe.dragged() {
            nav.swipe.motion(pos);
        }
        if swipe.drag_stopped()
            && let Some(dir) = nav.swipe.release(pos, swipe_threshold)
        {
            nav.step(dir, len);
        }
    }

    // ── Navigation buttons, top right ──
    let nav_rect = rect.shrink(20.0 * zoom);
    ui.scope_builder(
        egui::UiBuilder::new()
            .max_rect(nav_rect)
            .layout(egui::Layout::right_to_left(egui::Align::Min)),
        |ui| {
            ui.spacing_mut().item_spacing.x = 10.0 * zoom;
            for (i, s) in content.sections.iter().enumerate().rev() {
                let active = i == nav.current;
                let (fill, stroke) = if active { (51, 77) } else { (13, 26) };
                let button = egui::Button::new(
                    egui::RichText::new(&s.title)
                        .size(14.0 * zoom)
                        .color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_white_alpha(fill))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(stroke)))
                .corner_radius(egui::CornerRadius::same(px_u8(20.0 * zoom)));
                if ui.add(button).clicked() {
                    nav.select(i, len);
                }
            }
        },
    );

    // ── Section body ──
    let body_rect = egui::Rect::from_min_max(
        rect.min + egui::vec2(40.0, 60.0) * zoom,
        rect.max - egui::vec2(40.0, 50.0) * zoom,
    );
    ui.scope_builder(
        egui::UiBuilder::new()
            .max_rect(body_rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
        |ui| {
            egui::ScrollArea::vertical()
                .id_salt(("portfolio_section", nav.current))
                .scroll_source(ScrollSource::MOUSE_WHEEL | ScrollSource::SCROLL_BAR)
                .show(ui, |ui| draw_section(ui, section, zoom));
        },
    );

    // ── Section indicators, bottom center ──
    let dot = 8.0 * zoom;
    let row = len as f32 * dot + len.saturating_sub(1) as f32 * dot;
    let mut x = rect.center().x - row / 2.0;
    let y = rect.bottom() - 30.0 * zoom;
    for i in 0..len {
        let dot_rect = egui::Rect::from_min_size(egui::pos2(x, y - dot), egui::vec2(dot, dot));
        let response = ui.interact(dot_rect, egui::Id::new(("portfolio_dot", i)), egui::Sense::click());
        let color = if i == nav.current {
            egui::Color32::WHITE
        } else {
            egui::Color32::from_white_alpha(77)
        };
        ui.painter().circle_filled(dot_rect.center(), dot / 2.0, color);
        if response.clicked() {
            nav.select(i, len);
        }
        x += 2.0 * dot;
    }
}

fn draw_section(ui: &mut egui::Ui, section: &Section, zoom: f32) {
    let accent = accent(section);
    ui.label(
        egui::RichText::new(&section.heading)
            .size(section.heading_size * zoom)
            .strong()
            .color(accent),
    );
    ui.add_space(20.0 * zoom);

    for block in &section.blocks {
        match block {
            Block::Lead(text) => {
                ui.label(
                    egui::RichText::new(text)
                        .size(20.0 * zoom)
                        .color(egui::Color32::WHITE),
                );
            }
            Block::Paragraph(text) => {
                ui.label(
                    egui::RichText::new(text)
                        .size(16.0 * zoom)
                        .color(egui::Color32::from_white_alpha(204)),
                );
            }
            Block::Tags(tags) => {
                ui.add_space(15.0 * zoom);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0) * zoom;
                    for tag in tags {
                        egui::Frame::new()
                            .fill(accent.gamma_multiply(0.1))
                            .stroke(egui::Stroke::new(1.0, accent))
                            .corner_radius(egui::CornerRadius::same(px_u8(20.0 * zoom)))
                            .inner_margin(egui::Margin::symmetric(px_i8(16.0 * zoom), px_i8(8.0 * zoom)))
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(tag).size(16.0 * zoom).color(accent));
                            });
                    }
                });
            }
            Block::Card { title, body } => {
                egui::Frame::new()
                    .fill(egui::Color32::from_white_alpha(13))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_white_alpha(26)))
                    .corner_radius(egui::CornerRadius::same(px_u8(10.0 * zoom)))
                    .inner_margin(egui::Margin::same(px_i8(20.0 * zoom)))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(title).size(24.0 * zoom).color(accent));
                        ui.label(
                            egui::RichText::new(body)
                                .size(16.0 * zoom)
                                .color(egui::Color32::from_white_alpha(204)),
                        );
                    });
            }
            Block::Contact { icon, label } => {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 15.0 * zoom;
                    ui.label(egui::RichText::new(icon).size(24.0 * zoom));
                    ui.label(egui::RichText::new(label).size(18.0 * zoom).color(accent));
                });
            }
        }
        ui.add_space(15.0 * zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: egui::Rect = egui::Rect {
        min: egui::pos2(100.0, 100.0),
        max: egui::pos2(630.0, 550.0),
    };
    const PROJECTS: usize = 2;

    /// Drives `draw_screen` in a headless egui context.
    struct Screen {
        ctx: egui::Context,
        content: ResumeContent,
        nav: PanelNav,
    }

    impl Screen {
        fn on_section(section: usize) -> Self {
            let content = ResumeContent::default();
            let mut nav = PanelNav::default();
            nav.select(section, content.sections.len());
            let mut screen = Self {
                ctx: egui::Context::default(),
                content,
                nav,
            };
            // Lay out once so hit-testing knows the widget rects.
            screen.frame(Vec::new());
            screen
        }

        fn frame(&mut self, events: Vec<egui::Event>) {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 600.0),
                )),
                events,
                ..Default::default()
            };
            let (content, nav) = (&self.content, &mut self.nav);
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    draw_screen(ui, PANEL, 1.0, content, &mut *nav, 50.0);
                });
            });
        }

        fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            }
        }

        fn drag(&mut self, from: egui::Pos2, to: egui::Pos2) {
            self.frame(vec![egui::Event::PointerMoved(from)]);
            self.frame(vec![Self::button(from, true)]);
            for i in 1..=5 {
                let pos = from.lerp(to, i as f32 / 5.0);
                self.frame(vec![egui::Event::PointerMoved(pos)]);
            }
            self.frame(vec![Self::button(to, false)]);
            self.frame(Vec::new());
        }
    }

    #[test]
    fn swipe_over_scrolling_body_changes_section() {
        let mut screen = Screen::on_section(PROJECTS);
        screen.drag(egui::pos2(450.0, 300.0), egui::pos2(300.0, 300.0));
        assert_eq!(screen.nav.current, PROJECTS + 1);
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut screen = Screen::on_section(PROJECTS);
        screen.drag(egui::pos2(250.0, 300.0), egui::pos2(400.0, 300.0));
        assert_eq!(screen.nav.current, PROJECTS - 1);
    }

    #[test]
    fn threshold_counts_from_press_point() {
        let mut screen = Screen::on_section(PROJECTS);
        // 55 pt in total, past the threshold only when measured from the press.
        screen.drag(egui::pos2(450.0, 300.0), egui::pos2(395.0, 300.0));
        assert_eq!(screen.nav.current, PROJECTS + 1);

        let mut screen = Screen::on_section(PROJECTS);
        screen.drag(egui::pos2(450.0, 300.0), egui::pos2(410.0, 300.0));
        assert_eq!(screen.nav.current, PROJECTS);
    }
}
