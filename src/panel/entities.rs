use bevy::prelude::*;

use super::PanelConfig;

/// One building block of a resume section.
#[derive(Clone, Debug)]
pub enum Block {
    /// Large introductory line.
    Lead(String),
    /// Body text.
    Paragraph(String),
    /// Pill-shaped skill tags.
    Tags(Vec<String>),
    /// Boxed project card.
    Card {
        /// Card heading.
        title: String,
        /// Card description.
        body: String,
    },
    /// Icon + label contact line.
    Contact {
        /// Emoji shown before the label.
        icon: String,
        /// Contact text.
        label: String,
    },
}

/// A navigable page of the resume.
#[derive(Clone, Debug)]
pub struct Section {
    /// Label of the navigation button.
    pub title: String,
    /// Heading at the top of the page.
    pub heading: String,
    /// Heading font size in layout points.
    pub heading_size: f32,
    /// Heading and highlight color (sRGB).
    pub accent: [u8; 3],
    /// Page body.
    pub blocks: Vec<Block>,
}

/// Resume shown on the computer screen.
#[derive(Resource, Clone, Debug)]
pub struct ResumeContent {
    /// Pages in navigation order.
    pub sections: Vec<Section>,
}

impl Default for ResumeContent {
    fn default() -> Self {
        let text = |s: &str| s.to_string();
        let card = |title: &str, body: &str| Block::Card {
            title: title.into(),
            body: body.into(),
        };
        let contact = |icon: &str, label: &str| Block::Contact {
            icon: icon.into(),
            label: label.into(),
        };
        Self {
            sections: vec![
                Section {
                    title: text("Welcome"),
                    heading: text("Amirali BG"),
                    heading_size: 48.0,
                    accent: [0x66, 0x7e, 0xea],
                    blocks: vec![
                        Block::Lead(text("Full-stack Developer & UI/UX Designer")),
                        Block::Paragraph(text(
                            "Building beautiful, performant web applications with modern technologies.",
                        )),
                    ],
                },
                Section {
                    title: text("About"),
                    heading: text("About Me"),
                    heading_size: 36.0,
                    accent: [0x64, 0xff, 0xda],
                    blocks: vec![
                        Block::Paragraph(text(
                            "I'm a passionate developer with expertise in React, TypeScript, and \
                             modern web technologies. I love creating interactive experiences that \
                             combine beautiful design with robust functionality.",
                        )),
                        Block::Tags(
                            ["React", "TypeScript", "Three.js", "Node.js", "Python", "UI/UX"]
                                .map(text)
                                .to_vec(),
                        ),
                    ],
                },
                Section {
                    title: text("Projects"),
                    heading: text("Featured Projects"),
                    heading_size: 36.0,
                    accent: [0xff, 0x6b, 0x6b],
                    blocks: vec![
                        card(
                            "3D Portfolio Site",
                            "Interactive portfolio with Three.js integration and CSS3D rendering.",
                        ),
                        card(
                            "E-Commerce Platform",
                            "Full-stack e-commerce solution with React and Node.js.",
                        ),
                        card(
                            "Mobile App Design",
                            "UI/UX design for a productivity mobile application.",
                        ),
                    ],
                },
                Section {
                    title: text("Contact"),
                    heading: text("Get In Touch"),
                    heading_size: 36.0,
                    accent: [0x4e, 0xcd, 0xc4],
                    blocks: vec![
                        Block::Paragraph(text(
                            "I'm always interested in new opportunities and exciting projects. \
                             Let's connect and build something amazing together!",
                        )),
                        contact("📧", "contact@amiralibg.dev"),
                        contact("💼", "LinkedIn Profile"),
                        contact("🐙", "GitHub Portfolio"),
                    ],
                },
            ],
        }
    }
}

/// Direction of a section change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Towards the following section.
    Next,
    /// Towards the preceding section.
    Previous,
}

/// Pointer movement (points) before a press counts as a drag.
const MOVE_SLOP: f32 = 4.0;

/// Pointer gesture tracking for swipe navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeState {
    start: Vec2,
    is_down: bool,
    did_move: bool,
}

impl SwipeState {
    /// Pointer went down at `pos`.
    pub fn press(&mut self, pos: Vec2) {
        *self = Self {
            start: pos,
            is_down: true,
            did_move: false,
        };
    }

    /// Pointer moved to `pos` while held.
    pub fn motion(&mut self, pos: Vec2) {
        if self.is_down && pos.distance(self.start) > MOVE_SLOP {
            self.did_move = true;
        }
    }

    /// Pointer released at `pos`. A mostly horizontal drag of at least
    /// `threshold` points yields a direction; leftwards means next.
    pub fn release(&mut self, pos: Vec2, threshold: f32) -> Option<SwipeDirection> {
        let was_down = std::mem::take(&mut self.is_down);
        if !was_down || !self.did_move {
            return None;
        }
        let delta = pos - self.start;
        if delta.x.abs() < threshold || delta.x.abs() <= delta.y.abs() {
            return None;
        }
        Some(if delta.x < 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        })
    }
}

/// Which section is showing, plus the in-flight swipe gesture.
#[derive(Resource, Debug, Default)]
pub struct PanelNav {
    /// Index into [`ResumeContent::sections`].
    pub current: usize,
    /// Gesture owned by the panel's swipe handler.
    pub swipe: SwipeState,
}

impl PanelNav {
    /// Jumps to section `index` if it exists.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.current = index;
        }
    }

    /// Moves one section in `dir`, stopping at either end.
    pub fn step(&mut self, dir: SwipeDirection, len: usize) {
        if len == 0 {
            return;
        }
        self.current = match dir {
            SwipeDirection::Next => (self.current + 1).min(len - 1),
            SwipeDirection::Previous => self.current.saturating_sub(1),
        };
    }

    /// Back to the first section with no gesture in flight.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// World-space points used to place the panel on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelAnchors {
    /// Panel center.
    pub center: Vec3,
    /// Midpoint of the right edge.
    pub right: Vec3,
    /// Midpoint of the top edge.
    pub top: Vec3,
}

impl PanelAnchors {
    /// Anchors for a panel attached to the screen mesh at `screen`.
    pub fn on_screen(screen: &GlobalTransform, cfg: &PanelConfig) -> Self {
        let r = cfg.local_rotation;
        let rotation = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        let half = cfg.layout_size * cfg.world_scale / cfg.points_per_world_unit / 2.0;
        let local = |offset: Vec3| screen.transform_point(cfg.local_offset + rotation * offset);
        Self {
            center: local(Vec3::ZERO),
            right: local(Vec3::X * half.x),
            top: local(Vec3::Y * half.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 50.0;

    fn swipe(from: Vec2, to: Vec2) -> Option<SwipeDirection> {
        let mut s = SwipeState::default();
        s.press(from);
        s.motion((from + to) / 2.0);
        s.motion(to);
        s.release(to, THRESHOLD)
    }

    // ── SwipeState ──────────────────────────────────────────────────

    #[test]
    fn left_swipe_is_next() {
        assert_eq!(
            swipe(Vec2::new(300.0, 200.0), Vec2::new(200.0, 210.0)),
            Some(SwipeDirection::Next)
        );
    }

    #[test]
    fn right_swipe_is_previous() {
        assert_eq!(
            swipe(Vec2::new(100.0, 200.0), Vec2::new(180.0, 190.0)),
            Some(SwipeDirection::Previous)
        );
    }

    #[test]
    fn short_swipe_is_ignored() {
        assert_eq!(swipe(Vec2::new(100.0, 100.0), Vec2::new(140.0, 100.0)), None);
    }

    #[test]
    fn vertical_swipe_is_ignored() {
        assert_eq!(swipe(Vec2::new(100.0, 100.0), Vec2::new(40.0, 200.0)), None);
    }

    #[test]
    fn release_without_motion_is_a_click() {
        let mut s = SwipeState::default();
        s.press(Vec2::ZERO);
        assert_eq!(s.release(Vec2::new(-200.0, 0.0), THRESHOLD), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut s = SwipeState::default();
        s.motion(Vec2::new(-200.0, 0.0));
        assert_eq!(s.release(Vec2::new(-200.0, 0.0), THRESHOLD), None);
    }

    #[test]
    fn release_ends_the_gesture() {
        let mut s = SwipeState::default();
        s.press(Vec2::ZERO);
        s.motion(Vec2::new(-100.0, 0.0));
        assert!(s.release(Vec2::new(-100.0, 0.0), THRESHOLD).is_some());
        assert_eq!(s.release(Vec2::new(-100.0, 0.0), THRESHOLD), None);
    }

    // ── PanelNav ────────────────────────────────────────────────────

    #[test]
    fn step_stops_at_ends() {
        let mut nav = PanelNav::default();
        nav.step(SwipeDirection::Previous, 4);
        assert_eq!(nav.current, 0);
        for _ in 0..10 {
            nav.step(SwipeDirection::Next, 4);
        }
        assert_eq!(nav.current, 3);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut nav = PanelNav::default();
        nav.select(2, 4);
        assert_eq!(nav.current, 2);
        nav.select(4, 4);
        assert_eq!(nav.current, 2);
    }

    #[test]
    fn reset_returns_to_first_section() {
        let mut nav = PanelNav::default();
        nav.select(3, 4);
        nav.swipe.press(Vec2::ONE);
        nav.reset();
        assert_eq!(nav.current, 0);
        assert_eq!(nav.swipe, SwipeState::default());
    }

    // ── ResumeContent ───────────────────────────────────────────────

    #[test]
    fn default_resume_has_four_sections() {
        let titles: Vec<_> = ResumeContent::default()
            .sections
            .iter()
            .map(|s| s.title.clone())
            .collect();
        assert_eq!(titles, ["Welcome", "About", "Projects", "Contact"]);
    }

    // ── PanelAnchors ────────────────────────────────────────────────

    #[test]
    fn anchors_follow_panel_rotation() {
        let cfg = PanelConfig::default();
        let anchors = PanelAnchors::on_screen(&GlobalTransform::IDENTITY, &cfg);
        let half = cfg.layout_size * cfg.world_scale / cfg.points_per_world_unit / 2.0;

        assert!((anchors.center - cfg.local_offset).length() < 1e-6);
        // Rotated about -Y by ~90°: panel right points along +Z.
        let right = anchors.right - anchors.center;
        assert!((right.length() - half.x).abs() < 1e-4);
        assert!(right.z > 0.99 * half.x);
        let top = anchors.top - anchors.center;
        assert!((top - Vec3::Y * half.y).length() < 1e-4);
    }

    #[test]
    fn anchors_follow_screen_transform() {
        let cfg = PanelConfig::default();
        let screen = GlobalTransform::from(Transform::from_xyz(1.0, 2.0, 3.0).with_scale(Vec3::splat(2.0)));
        let anchors = PanelAnchors::on_screen(&screen, &cfg);
        let expected = Vec3::new(1.0, 2.0, 3.0) + cfg.local_offset * 2.0;
        assert!((anchors.center - expected).length() < 1e-5);
    }
}
