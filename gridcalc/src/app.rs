//! gridcalc application

use calccore::engine::Engine;
use calccore::keypad::{Key, KeyClass, LAYOUT};
use calccore::theme::{menu_bar, CalcColors};
use egui::Context;

pub struct GridCalcApp {
    engine: Engine,
    show_about: bool,
}

impl GridCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            engine: Engine::new(),
            show_about: false,
        }
    }

    fn press_label(&mut self, label: &str) {
        let Some(key) = Key::from_label(label) else {
            eprintln!("[gridcalc] unknown button label: {label}");
            return;
        };
        if let Err(err) = self.engine.press(key) {
            // Unreachable through the keypad except via a bare "."; the
            // display is left as it was.
            eprintln!("[gridcalc] {err}");
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = 48.0;
        egui::Frame::none()
            .fill(CalcColors::WHITE)
            .stroke(egui::Stroke::new(1.0, CalcColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(display_height);
                ui.set_max_height(display_height);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.engine.display())
                            .font(egui::FontId::proportional(28.0))
                            .strong(),
                    );
                });
            });
    }

    fn render_button(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        fill: egui::Color32,
        width: f32,
        height: f32,
    ) -> bool {
        ui.add_sized([width, height], egui::Button::new(label).fill(fill))
            .clicked()
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let btn_w = (ui.available_width() - 3.0 * ui.spacing().item_spacing.x) / 4.0;
        let btn_h = 38.0;

        for row in LAYOUT {
            ui.horizontal(|ui| {
                for label in row {
                    let fill = match Key::from_label(label).map(|k| k.class()) {
                        Some(KeyClass::Operator) => CalcColors::ORANGE,
                        Some(KeyClass::Memory) => CalcColors::MEMORY_GRAY,
                        _ => CalcColors::WHITE,
                    };
                    if self.render_button(ui, label, fill, btn_w, btn_h) {
                        self.press_label(label);
                    }
                }
            });
        }
    }
}

impl eframe::App for GridCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(CalcColors::FRAME_GRAY)
                    .inner_margin(egui::Margin::same(15.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
                ui.add_space(8.0);
                ui.label(self.engine.memory_text());
            });

        if self.show_about {
            egui::Window::new("about calculator")
                .collapsible(false)
                .resizable(false)
                .default_width(240.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("calculator");
                        ui.label("version 0.1.0");
                        ui.add_space(4.0);
                        ui.label("basic arithmetic, power, square root,");
                        ui.label("and a one-register memory");
                    });
                    ui.add_space(4.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
