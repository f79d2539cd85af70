use sdl2::keyboard::Keycode;

use rastly::prelude::*;

/// Per-frame rotation speed in radians per millisecond.
const ROTATION_SPEED: f32 = 0.0006;

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let mesh_path = args.next();
    let texture_path = args.next();

    let mut window = Window::new(
        "rastly",
        rastly::window::WINDOW_WIDTH,
        rastly::window::WINDOW_HEIGHT,
    )?;
    let mut engine = Engine::new(window.width(), window.height());

    match mesh_path {
        Some(path) => engine.load_mesh(&path).map_err(|e| e.to_string())?,
        None => engine.load_cube_mesh(),
    }
    if let Some(path) = texture_path {
        engine.load_texture(&path).map_err(|e| e.to_string())?;
        engine.set_render_mode(RenderMode::Textured);
    }

    // Place the model in front of the origin camera
    engine.mesh_mut().translation_mut().z = 5.0;

    let mut limiter = FrameLimiter::new(&window);

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h);
            }
            WindowEvent::Key(key) => handle_key(&mut engine, key),
            WindowEvent::None => {}
        }

        let delta = limiter.wait_and_get_delta(&window);
        let rotation = engine.mesh_mut().rotation_mut();
        rotation.x += ROTATION_SPEED * delta as f32;
        rotation.y += ROTATION_SPEED * delta as f32;

        engine.update();
        engine.render();
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}

fn handle_key(engine: &mut Engine, key: Keycode) {
    match key {
        Keycode::Num1 => engine.set_render_mode(RenderMode::Wireframe),
        Keycode::Num2 => engine.set_render_mode(RenderMode::WireframeVertices),
        Keycode::Num3 => engine.set_render_mode(RenderMode::Filled),
        Keycode::Num4 => engine.set_render_mode(RenderMode::FilledWireframe),
        Keycode::Num5 => engine.set_render_mode(RenderMode::Textured),
        Keycode::Num6 => engine.set_render_mode(RenderMode::TexturedWireframe),
        Keycode::C => engine.backface_culling = !engine.backface_culling,
        Keycode::G => engine.draw_grid = !engine.draw_grid,
        Keycode::R => {
            let next = match engine.rasterizer() {
                RasterizerType::Scanline => RasterizerType::EdgeFunction,
                RasterizerType::EdgeFunction => RasterizerType::Scanline,
            };
            engine.set_rasterizer(next);
        }
        _ => {}
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("rastly: {e}");
        std::process::exit(1);
    }
}
