use crate::TouchTrackerApp;

/// The drawing surface. Fills the window, feeds its input to the app and
/// paints the board.
pub fn central_panel(app: &mut TouchTrackerApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            let frame = app.board().render_frame();
            app.renderer().render(&painter, canvas_rect, &frame);
        });
}
