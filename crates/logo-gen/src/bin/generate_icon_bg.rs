//! Mint badge icon, trimmed to the background disc.

use logo_core::variant::BADGE_MINT;

fn main() -> logo_render::Result<()> {
    logo_gen::init_logging();
    logo_gen::generate(&BADGE_MINT)
}
