//! Glyph-only logo, dark charcoal on transparent.

use logo_core::variant::ARCHITECTURAL_REDESIGNED;

fn main() -> logo_render::Result<()> {
    logo_gen::init_logging();
    logo_gen::generate(&ARCHITECTURAL_REDESIGNED)
}
