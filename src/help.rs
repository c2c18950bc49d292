mod help_line_render;

pub use help_line_render::render_line;
