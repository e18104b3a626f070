//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

use crate::config::{GlConfig, WindowConfig};
use crate::error::AppError;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Fields are declared so that the GL context drops before the window and SDL itself.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    _gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    _video_subsystem: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

impl App {
    /// Opens a window and creates a forward compatible core profile context for it.
    ///
    /// The requested size is ignored when `window.fullscreen` is set.
    pub fn new(window: &WindowConfig, gl_config: &GlConfig) -> Result<Self, AppError> {
        let sdl = sdl2::init().map_err(AppError::Sdl)?;
        let video_subsystem = sdl.video().map_err(AppError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(gl_config.major, gl_config.minor);
        gl_attr.set_context_flags().forward_compatible().set();
        gl_attr.set_double_buffer(true);

        let (width, height) = if window.fullscreen {
            let mode = video_subsystem
                .current_display_mode(0)
                .map_err(AppError::Sdl)?;
            (mode.w as u32, mode.h as u32)
        } else {
            (window.width, window.height)
        };

        let mut builder = video_subsystem.window(&window.title, width, height);
        builder.opengl().position_centered();
        if window.resizable {
            builder.resizable();
        }
        let mut sdl_window = builder
            .build()
            .map_err(|e| AppError::Sdl(e.to_string()))?;
        if window.fullscreen {
            sdl_window
                .set_fullscreen(sdl2::video::FullscreenType::Desktop)
                .map_err(AppError::Sdl)?;
        }

        let gl_context = sdl_window.gl_create_context().map_err(AppError::Sdl)?;
        sdl_window
            .gl_make_current(&gl_context)
            .map_err(AppError::Sdl)?;

        let interval = if gl_config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        unsafe {
            log::info!("OpenGL {}", gl.get_parameter_string(glow::VERSION));
            log::debug!(
                "Renderer: {} ({})",
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::VENDOR)
            );
        }

        let event_pump = sdl.event_pump().map_err(AppError::Sdl)?;

        Ok(Self {
            gl: Arc::new(gl),
            event_pump,
            _gl_context: gl_context,
            window: sdl_window,
            _video_subsystem: video_subsystem,
            _sdl: sdl,
        })
    }

    /// Size of the default framebuffer in pixels. May differ from the window size on HiDPI
    /// displays.
    pub fn drawable_size(&self) -> (i32, i32) {
        let (width, height) = self.window.drawable_size();
        (width as i32, height as i32)
    }

    /// Presents the back buffer.
    pub fn swap(&self) {
        self.window.gl_swap_window();
    }
}
