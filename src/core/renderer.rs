/// Renderer trait for drawing a game's state using Ratatui.
///
/// Renderers are stateless: everything they need is in `S`, so they never
/// reach back into the game to mutate it.
pub trait GameRenderer<S> {
    fn render(frame: &mut ratatui::Frame, state: &S);
}
