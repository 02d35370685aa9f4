use sfml::graphics::{
    Color, FloatRect, PrimitiveType, RenderStates, RenderTarget, RenderWindow, Vertex, View,
};
use sfml::system::{sleep, Clock, Time, Vector2f};
use sfml::window::{ContextSettings, Event, Key, Style, VideoMode};
use sfml::SfBox;

use bitflags::bitflags;
use thiserror::Error;

use crate::animation::{frame_wait, InputAction, PatternState};
use crate::cli::Options;
use crate::color::ColorConfig;
use crate::pattern;

bitflags! {
    pub struct Flags: u8 {
        const FULLSCREEN = 1 << 0;
    }
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("couldn't open a {width}x{height} render window")]
    WindowOpen { width: u32, height: u32 },
}

const WINDOW_SIZE: (u32, u32) = (800, 600);
const TITLE: &str = "Cardioid";

pub struct App {
    window: RenderWindow,
    frame_clock: SfBox<Clock>,
    flags: Flags,
    state: PatternState,
    colors: ColorConfig,
    dots: u32,
    ms_per_frame: i32,
}

impl App {
    //
    // Lifecycle code
    //

    pub fn create(options: &Options) -> Result<App, SetupError> {
        let window = Self::open_window(Flags::empty())?;

        Ok(App {
            window,
            frame_clock: Clock::start(),
            flags: Flags::empty(),
            state: PatternState::new(options.multiplier, options.mult_increase),
            colors: ColorConfig {
                saturation: options.saturation,
                lightness: options.lightness,
                rainbow: options.rainbow,
            },
            dots: options.dots,
            ms_per_frame: (1000 / options.fps) as i32,
        })
    }

    fn open_window(flags: Flags) -> Result<RenderWindow, SetupError> {
        let mut ctx_settings = ContextSettings::default();
        ctx_settings.antialiasing_level = 8;

        let video_mode = if flags.contains(Flags::FULLSCREEN) {
            VideoMode::desktop_mode()
        } else {
            VideoMode::from(WINDOW_SIZE)
        };

        let window = RenderWindow::new(
            video_mode,
            TITLE,
            if flags.contains(Flags::FULLSCREEN) {
                Style::FULLSCREEN
            } else {
                Style::DEFAULT
            },
            &ctx_settings,
        );
        if !window.is_open() {
            return Err(SetupError::WindowOpen {
                width: video_mode.width,
                height: video_mode.height,
            });
        }

        Ok(window)
    }

    pub fn run(&mut self) {
        self.draw_frame();

        while !self.state.stopped() {
            self.frame_clock.restart();

            let action = self.poll_action();
            self.state.apply(action);
            if action == InputAction::TogglePause {
                if self.state.paused() {
                    self.window.set_title(&format!("{TITLE} [paused]"));
                } else {
                    self.window.set_title(TITLE);
                }
            }
            self.state.tick();

            // Render even while paused so window resizes repaint.
            self.draw_frame();

            let elapsed = self.frame_clock.elapsed_time().as_milliseconds();
            if let Some(wait) = frame_wait(self.ms_per_frame, elapsed) {
                sleep(Time::milliseconds(wait));
            }
        }

        self.window.close();
    }

    //
    // Input processing code
    //

    fn poll_action(&mut self) -> InputAction {
        let mut action = InputAction::None;

        while let Some(event) = self.window.poll_event() {
            match event {
                Event::Closed => action = InputAction::Quit,
                Event::KeyPressed { code, .. } => match code {
                    Key::Escape | Key::Q => action = InputAction::Quit,
                    Key::Space | Key::Enter => action = InputAction::TogglePause,
                    Key::F | Key::F11 => self.toggle_fullscreen(),
                    _ => (),
                },
                Event::Resized { width, height } => {
                    self.window.set_view(&View::from_rect(FloatRect::new(
                        0.0,
                        0.0,
                        width as f32,
                        height as f32,
                    )));
                    action = InputAction::Resize(width, height);
                }
                _ => (),
            }
        }

        action
    }

    fn toggle_fullscreen(&mut self) {
        self.flags.toggle(Flags::FULLSCREEN);
        match Self::open_window(self.flags) {
            Ok(window) => self.window = window,
            Err(error) => {
                eprintln!("{error}");
                self.flags.toggle(Flags::FULLSCREEN);
            }
        }
    }

    //
    // Draw code
    //

    fn draw_frame(&mut self) {
        let size = self.window.size();
        let segments =
            pattern::compute_frame(size.x, size.y, self.dots, self.state.multiplier, &self.colors);

        let mut lines = Vec::with_capacity(segments.len() * 2);
        let mut anchors = Vec::with_capacity(segments.len());
        for segment in &segments {
            let color = Color::rgb(segment.color.r, segment.color.g, segment.color.b);
            let from = Vector2f::new(segment.from.x as f32, segment.from.y as f32);
            let to = Vector2f::new(segment.to.x as f32, segment.to.y as f32);

            lines.push(Vertex::new(from, color, (0.0, 0.0).into()));
            lines.push(Vertex::new(to, color, (0.0, 0.0).into()));
            anchors.push(Vertex::new(from, color, (0.0, 0.0).into()));
        }

        self.window.clear(Color::BLACK);
        self.window
            .draw_primitives(&lines, PrimitiveType::LINES, &RenderStates::DEFAULT);
        self.window
            .draw_primitives(&anchors, PrimitiveType::POINTS, &RenderStates::DEFAULT);
        self.window.display();
    }
}
