#![cfg(target_arch = "wasm32")]
use crate::core::{AnimationTargets, Scene, SceneAssembly, SceneParams, SECTION_COUNT};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // DOM effects work without the 3D scene, so wire them first
    let targets = Rc::new(RefCell::new(AnimationTargets::default()));
    let blocks = dom::query_document_elements(&document, constants::PAGE_CONTENT_SELECTOR);
    if blocks.len() != SECTION_COUNT {
        log::warn!(
            "[scroll] expected {} content blocks, found {}",
            SECTION_COUNT,
            blocks.len()
        );
    }
    events::wire_scroll(targets.clone(), blocks);
    events::wire_card_tilt(&document);
    events::wire_footer_parallax(&document);

    let canvas: web::HtmlCanvasElement = match document
        .query_selector(constants::CANVAS_SELECTOR)
        .ok()
        .flatten()
        .map(|el| el.dyn_into::<web::HtmlCanvasElement>())
    {
        Some(Ok(c)) => c,
        _ => {
            log::error!(
                "[init] no canvas matches {}, skipping the 3D scene",
                constants::CANVAS_SELECTOR
            );
            return Ok(());
        }
    };

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    let Some(gpu) = frame::init_gpu(&canvas).await else {
        log::warn!("[init] no WebGPU, the page runs without the 3D scene");
        return Ok(());
    };

    let scene = Rc::new(RefCell::new(Scene::default()));
    let pending_models: assets::PendingModels = Rc::new(RefCell::new(Vec::new()));
    assets::spawn_model_loads(assets::LoadWiring {
        scene: scene.clone(),
        assembly: Rc::new(RefCell::new(SceneAssembly::new(StdRng::from_entropy()))),
        pending: pending_models.clone(),
    });

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        targets,
        pending_models,
        params: SceneParams::default(),
        canvas,
        gpu,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
