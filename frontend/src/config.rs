
#[cfg(debug_assertions)]
pub fn get_content_url() -> &'static str {
    match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321",  // Local supabase stack
    }
}

#[cfg(not(debug_assertions))]
pub fn get_content_url() -> &'static str {
    match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "",  // Served behind the same origin in production
    }
}

// Public anon key, read-only access to the book table
pub fn get_content_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}

pub const BOOKS_TABLE: &str = "VENDER-ORATORIA";
pub const CHECKOUT_URL: &str = "https://pay.cakto.com.br/377wp2j_560310";

pub const HERO_VIDEO_SRC: &str = "/video-novo-atualizado.mp4";
pub const OFFER_VIDEO_SRC: &str = "/video-biblioteca-anuncios.mp4";

pub const HERO_VIDEO_PLAYED_KEY: &str = "hero-video-played";

/// Fraction of the player that must be on screen before it autoplays.
pub const AUTOPLAY_THRESHOLD: f64 = 0.6;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const BOOK_REVEAL_STAGGER_MS: u32 = 100;
pub const BENEFIT_REVEAL_STAGGER_MS: u32 = 200;

pub const CAROUSEL_AUTOPLAY_MS: u32 = 4000;
pub const CONTROLS_HIDE_MS: u32 = 3000;
pub const FIRST_AUDIO_DELAY_MS: u32 = 1000;

/// Pixels the book strip moves per animation frame.
pub const STRIP_SPEED: f64 = 0.5;
/// Approximate width of one strip card. Cards are w-40/w-48 plus the gap, so
/// the wrap point is an estimate rather than a measurement.
pub const STRIP_CARD_WIDTH: f64 = 200.0;
