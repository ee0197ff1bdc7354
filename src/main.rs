//! Bonnie 2D demo
//!
//! Builds a small scene (tile map, sprite, Latin and Hangul text) and
//! renders it through the software canvas every frame:
//! - Arrow keys scroll the tile map
//! - Space toggles the text panel

use std::cell::RefCell;
use std::rc::Rc;

use bonnie_2d::assets::load_texture;
use bonnie_2d::config::EngineConfig;
use bonnie_2d::font::DosFont;
use bonnie_2d::rasterizer::{Color, Texture};
use bonnie_2d::scene::{NodeKind, Plane, SceneNode, Sprite, Text, TileMap, TileMapLayer, TileSet};
use bonnie_2d::screen::Canvas;
use bonnie_2d::VERSION;
use macroquad::logging::{info, warn};
use macroquad::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "assets/engine.ron";

/// Sprite sheet frame size
const FRAME_SIZE: usize = 16;

/// Read the engine config, falling back to defaults (always on WASM)
fn engine_config() -> EngineConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match bonnie_2d::config::load_config(CONFIG_PATH) {
            Ok(cfg) => return cfg,
            Err(e) => warn!("Using default config, {} not loaded: {}", CONFIG_PATH, e),
        }
    }
    EngineConfig::default()
}

fn window_conf() -> Conf {
    let cfg = engine_config();
    Conf {
        window_title: format!("{} v{}", cfg.window_title, VERSION),
        window_width: (cfg.width as u32 * cfg.scale) as i32,
        window_height: (cfg.height as u32 * cfg.scale) as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Two-layer checkerboard tile map, 64x32 tiles
fn build_tile_map() -> TileMap {
    let ground = Texture::checkerboard(32, 16, Color::new(40, 70, 40), Color::new(50, 90, 50));
    let deco = Texture::checkerboard(32, 16, Color::new(90, 60, 30), Color::with_alpha(0, 0, 0, 0));

    let floor: Vec<Vec<usize>> = (0..32)
        .map(|row| (0..64).map(|col| 1 + (row + col) % 8).collect())
        .collect();
    let props: Vec<Vec<usize>> = (0..32)
        .map(|row| (0..64).map(|col| if (row * 7 + col * 3) % 11 == 0 { 9 } else { 0 }).collect())
        .collect();

    TileMap::new(8, 8)
        .with_tile_set(TileSet::new(Rc::new(ground), 8, 8))
        .with_tile_set(TileSet::new(Rc::new(deco), 8, 8))
        .with_layer(TileMapLayer::new(floor))
        .with_layer(TileMapLayer::new(props))
}

fn build_scene(font: Rc<RefCell<DosFont>>, sprite_sheet: Rc<Texture>, cfg: &EngineConfig) -> SceneNode {
    let mut root = SceneNode::group().with_name("root");

    root.add_child(SceneNode::tile_map(build_tile_map()).with_name("map"));

    root.add_child(
        SceneNode::new(NodeKind::Sprite(Sprite::new(sprite_sheet, 0, 0)), FRAME_SIZE, FRAME_SIZE)
            .with_name("hero")
            .at(cfg.width as i32 / 2 - 8, cfg.height as i32 / 2 - 8),
    );

    let panel_w = cfg.width.saturating_sub(16);
    let panel = root.add_child(
        SceneNode::new(NodeKind::Plane(Plane::new(Color::with_alpha(0, 0, 40, 200))), panel_w, 56)
            .with_name("panel")
            .at(8, cfg.height as i32 - 64),
    );

    let mut title = Text::new(font.clone(), &format!("Bonnie 2D v{}", VERSION), Color::WHITE);
    title.set_background_color(Some(Color::new(0, 0, 120)));
    panel.add_child(SceneNode::new(NodeKind::Text(title), 0, 16).at(4, 4));

    let mut greeting = Text::new(font, "Hello! 안녕하세요, 한글 글꼴입니다.\n", Color::new(255, 255, 0));
    greeting.append_text("ㄱㄴㄷ ㅏㅑㅓ");
    panel.add_child(SceneNode::new(NodeKind::Text(greeting), panel_w - 8, 32).at(4, 22));

    root
}

/// Upload the canvas and draw it letterboxed at an integer scale
fn present(canvas: &Canvas) {
    let fb = &canvas.framebuffer;
    let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
    texture.set_filter(FilterMode::Nearest);

    let scale = (screen_width() / fb.width as f32)
        .min(screen_height() / fb.height as f32)
        .floor()
        .max(1.0);
    let draw_w = fb.width as f32 * scale;
    let draw_h = fb.height as f32 * scale;

    draw_texture_ex(
        &texture,
        ((screen_width() - draw_w) / 2.0).round(),
        ((screen_height() - draw_h) / 2.0).round(),
        WHITE,
        DrawTextureParams {
            dest_size: Some(Vec2::new(draw_w, draw_h)),
            ..Default::default()
        },
    );
}

#[macroquad::main(window_conf)]
async fn main() {
    let cfg = engine_config();

    let font = DosFont::load(&cfg.latin_font, &cfg.hangul_font).await.with_tint(cfg.font_tint);
    if !font.is_latin_ready() || !font.is_hangul_ready() {
        warn!("Font tables missing, affected characters will be blank");
    }
    let font = Rc::new(RefCell::new(font));

    let sprite_sheet = match load_texture("assets/sprites/hero.png").await {
        Some(tex) => tex,
        None => Texture::checkerboard(FRAME_SIZE * 4, FRAME_SIZE, Color::RED, Color::WHITE),
    };
    let frame_count = (sprite_sheet.width / FRAME_SIZE).max(1);

    let mut scene = build_scene(font, Rc::new(sprite_sheet), &cfg);
    let mut canvas = Canvas::new(cfg.width, cfg.height);

    info!("=== Bonnie 2D ===");

    loop {
        if let Some(map) = scene.find_mut("map") {
            if is_key_down(KeyCode::Left) {
                map.x += 2;
            }
            if is_key_down(KeyCode::Right) {
                map.x -= 2;
            }
            if is_key_down(KeyCode::Up) {
                map.y += 2;
            }
            if is_key_down(KeyCode::Down) {
                map.y -= 2;
            }
        }

        if is_key_pressed(KeyCode::Space) {
            if let Some(panel) = scene.find_mut("panel") {
                panel.visible = !panel.visible;
            }
        }

        if let Some(hero) = scene.find_mut("hero") {
            if let NodeKind::Sprite(sprite) = &mut hero.kind {
                let frame = (get_time() * 8.0) as usize % frame_count;
                sprite.set_source_x(frame * FRAME_SIZE);
            }
        }

        canvas.clear(cfg.clear_color);
        scene.draw(&mut canvas);

        clear_background(BLACK);
        present(&canvas);

        next_frame().await
    }
}
