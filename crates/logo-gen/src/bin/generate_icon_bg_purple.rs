//! Navy badge icon; the disc bleeds to every edge of the canvas.

use logo_core::variant::BADGE_NAVY;

fn main() -> logo_render::Result<()> {
    logo_gen::init_logging();
    logo_gen::generate(&BADGE_NAVY)
}
