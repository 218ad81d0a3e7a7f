use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use macroquad::prelude::*;
use tileworld::{
    Camera, FixedTimestep, InputSnapshot, MacroquadRenderer, Player, Render2d, TileWorld,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Tile World".into(),
        window_width: 800,
        window_height: 600,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut renderer = MacroquadRenderer::new();

    let mut world = TileWorld::load(
        Path::new("assets/home.json"),
        Path::new("assets/map_tiles.json"),
        &mut renderer,
    )
    .expect("Failed to load world");
    let mut player = Player::load(Path::new("assets/player_tiles.json"), &mut renderer)
        .expect("Failed to load player");
    player.set_position(64.0, 64.0);

    let mut camera = Camera::new(vec2(screen_width(), screen_height()), world.pixel_size());
    let mut timer = FixedTimestep::new(1.0 / 60.0);

    let collected = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&collected);
    world.set_collect_callback(move |_| counter.set(counter.get() + 1));

    loop {
        if is_key_pressed(KeyCode::F1) {
            let debug = !world.debug_rendering();
            world.set_debug_rendering(debug);
            player.set_debug_rendering(debug);
        }
        if is_key_pressed(KeyCode::Equal) {
            camera.set_zoom(camera.zoom() + 0.5);
        }
        if is_key_pressed(KeyCode::Minus) {
            camera.set_zoom(camera.zoom() - 0.5);
        }

        let input = InputSnapshot::from_keyboard();
        for _ in 0..timer.advance(get_frame_time()) {
            // Fixed per-step order: animations and items, then the
            // camera, then the collision-driven position commit.
            world.update(timer.step());
            let (cx, cy) = player.center();
            camera.update(cx, cy);
            player.update(timer.step(), &input, &world);
            let hitbox = player.collision_rect();
            world.resolve_item_collisions(hitbox.x, hitbox.y, hitbox.w, hitbox.h);
        }

        renderer.clear();
        let view = camera.view();
        world.render(&mut renderer, &view);
        player.render(&mut renderer, &view);
        renderer.draw_text(
            &format!("items: {}", collected.get()),
            vec2(16.0, 24.0),
            WHITE,
        );
        renderer.present();

        next_frame().await;
    }
}
