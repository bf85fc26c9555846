/// Reference tuning values for the Pong table
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (window size in pixels)
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 120;
    pub const PADDLE_SPEED: i32 = 6; // pixels per frame
    pub const PADDLE_X_PADDING: i32 = 10;
    pub const PADDLE_Y_PADDING: i32 = 10;

    // Ball
    pub const BALL_WIDTH: i32 = 20;
    pub const BALL_HEIGHT: i32 = 20;
    pub const BALL_SPEED: i32 = 4; // pixels per frame, per axis

    // Score
    pub const WIN_SCORE: u8 = 10; // First to 10 wins

    // Text
    pub const FONT_PATH: &'static str = "./FiraCode-Regular.ttf";
    pub const SCORE_FONT_SIZE: u16 = 18;
    pub const TITLE_FONT_SIZE: u16 = 24;
    pub const TIP_FONT_SIZE: u16 = 18;
    pub const SCORE_MARGIN: i32 = 20; // gap between the centre line and a score

    // Colours (r, g, b, a)
    pub const BACKGROUND_COLOR: [u8; 4] = [50, 50, 50, 255];
    pub const DIVIDER_COLOR: [u8; 4] = [30, 30, 30, 255];
    pub const PADDLE_COLOR: [u8; 4] = [250, 250, 250, 255];
    pub const BALL_COLOR: [u8; 4] = [200, 40, 40, 255];
    pub const TEXT_COLOR: [u8; 4] = [255, 255, 255, 255];
    pub const TIP_COLOR: [u8; 4] = [200, 200, 200, 255];
}
