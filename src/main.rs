use app::App;
use pong::{
    config::Config,
    input::{Key, KeyState},
};
use renderer::Renderer;
use std::sync::Arc;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

mod app;
mod error;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    log::debug!("{config:?}");

    let (mut app, ev_loop) = App::init(&config)?;
    let window = Arc::clone(&app.window);
    let mut renderer = Renderer::init(window, config.width as u32, config.height as u32)?;

    ev_loop.run(move |ev, loop_target| match ev {
        Event::WindowEvent { event, .. } => {
            renderer.window_event(&event);
            match event {
                WindowEvent::CloseRequested => {
                    loop_target.exit();
                }
                WindowEvent::Focused(false) => app.keys.release_all(),
                WindowEvent::KeyboardInput { event, .. } => {
                    handle_keyboard(&mut app.keys, event);
                    if app.keys.held(Key::Quit) {
                        loop_target.exit();
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = app.run_frame(&mut renderer) {
                        log::error!("{e}");
                        loop_target.exit();
                        return;
                    }
                    loop_target.set_control_flow(ControlFlow::Poll);
                }
                _ => (),
            }
        }
        Event::AboutToWait => {
            app.window.request_redraw();
        }
        _ => (),
    })?;

    Ok(())
}

fn handle_keyboard(keys: &mut KeyState, input: KeyEvent) {
    let key = match input.physical_key {
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::P1Up,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::P1Down,
        PhysicalKey::Code(KeyCode::KeyQ) => Key::P2Up,
        PhysicalKey::Code(KeyCode::KeyA) => Key::P2Down,
        PhysicalKey::Code(KeyCode::Space) => Key::Serve,
        PhysicalKey::Code(KeyCode::Escape) => Key::Quit,
        _ => return,
    };

    let held = match input.state {
        ElementState::Pressed => true,
        ElementState::Released => false,
    };

    keys.set(key, held);
}
