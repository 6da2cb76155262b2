use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

// short-lived banner echoing the last command
#[derive(Resource)]
pub struct StatusIndicator {
    pub text: String,
    pub timer: f32,
    pub duration: f32,
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self {
            text: String::new(),
            timer: 0.0,
            duration: 2.0,
        }
    }
}

impl StatusIndicator {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.timer = self.duration;
    }

    pub fn tick(&mut self, delta: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - delta).max(0.0);
        }
    }

    // fades out over the whole duration
    pub fn alpha(&self) -> f32 {
        (self.timer / self.duration).clamp(0.0, 1.0)
    }
}

#[derive(Event)]
pub struct StatusEvent(pub String);

pub fn update_status_indicator(
    mut indicator: ResMut<StatusIndicator>,
    mut events: EventReader<StatusEvent>,
    time: Res<Time>,
) {
    for event in events.read() {
        indicator.show(event.0.clone());
    }

    indicator.tick(time.delta_secs());
}

pub fn render_status_indicator(
    indicator: Res<StatusIndicator>,
    mut contexts: EguiContexts,
) {
    if indicator.timer <= 0.0 {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        let alpha = indicator.alpha();
        // background color, matched with the egui side panel
        let bg_color = egui::Color32::from_rgb(40, 44, 52);

        egui::Area::new(egui::Id::new("status_indicator"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 60.0))
            .show(ctx, |ui| {
                let frame = egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        bg_color.r(), bg_color.g(), bg_color.b(),
                        (200.0 * alpha) as u8
                    ))
                    .stroke(egui::Stroke::new(
                        1.5,
                        egui::Color32::from_rgba_unmultiplied(255, 255, 255, (180.0 * alpha) as u8)
                    ))
                    .inner_margin(egui::Margin::symmetric(16, 8))
                    .corner_radius(egui::CornerRadius::same(6));

                frame.show(ui, |ui| {
                    ui.label(egui::RichText::new(&indicator.text)
                        .size(16.0)
                        .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8))
                        .strong());
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_fades_and_stops() {
        let mut indicator = StatusIndicator::default();
        assert_eq!(indicator.alpha(), 0.0);
        indicator.show("Roof off");
        assert_eq!(indicator.alpha(), 1.0);
        indicator.tick(1.0);
        assert_eq!(indicator.alpha(), 0.5);
        indicator.tick(5.0);
        assert_eq!(indicator.timer, 0.0);
    }
}
