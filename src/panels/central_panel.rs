use crate::SolverApp;

/// The single full-window canvas: apply this frame's input, then redraw everything.
pub fn central_panel(app: &mut SolverApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.max_rect();
            app.handle_input(ctx, canvas_rect);

            let painter = ui.painter();
            app.renderer()
                .render(painter, canvas_rect.min, app.document(), app.state(), app.cursor());
        });
}
