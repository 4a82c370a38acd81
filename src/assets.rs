use crate::core::{GroupId, LoadError, ModelKind, ModelTemplate, Scene, SceneAssembly};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Templates waiting to be uploaded to the GPU by the frame loop.
pub type PendingModels = Rc<RefCell<Vec<(ModelKind, Rc<ModelTemplate>)>>>;

/// Everything a load completion touches.
#[derive(Clone)]
pub struct LoadWiring {
    pub scene: Rc<RefCell<Scene>>,
    pub assembly: Rc<RefCell<SceneAssembly<StdRng>>>,
    pub pending: PendingModels,
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let fetch_err = |e: wasm_bindgen::JsValue| LoadError::Fetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| LoadError::Fetch {
        url: url.to_string(),
        reason: "no window".to_string(),
    })?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(fetch_err)?;
    if !resp.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and parse one model, with its per-kind material adjustments applied.
pub async fn load_template(kind: ModelKind) -> Result<ModelTemplate, LoadError> {
    let bytes = fetch_bytes(kind.url()).await?;
    let mut template = ModelTemplate::from_glb(kind.name(), &bytes)?;
    if let Some(o) = kind.material_override() {
        template.apply_material_override(&o);
    }
    template.cast_shadow = kind.casts_shadow();
    Ok(template)
}

/// Start every model load. Loads run independently and complete in any
/// order; a failed load is logged and its slot stays empty for good, which
/// keeps any group depending on it unpopulated.
pub fn spawn_model_loads(w: LoadWiring) {
    for kind in ModelKind::ALL {
        let w = w.clone();
        spawn_local(async move {
            match load_template(kind).await {
                Ok(template) => on_model_loaded(&w, kind, template),
                Err(e) => {
                    log::error!(
                        "[assets] an error happened while loading the {} model: {}",
                        kind.name(),
                        e
                    );
                }
            }
        });
    }
}

fn on_model_loaded(w: &LoadWiring, kind: ModelKind, template: ModelTemplate) {
    log::info!(
        "[assets] loaded {} ({} primitives, {} triangles)",
        kind.name(),
        template.primitives.len(),
        template.triangle_count()
    );
    w.pending.borrow_mut().push((kind, Rc::new(template)));

    let populated = {
        let mut scene = w.scene.borrow_mut();
        w.assembly.borrow_mut().model_loaded(kind, &mut scene)
    };
    match populated {
        Some(group) => {
            let scene = w.scene.borrow();
            let g = scene.group(group);
            log::info!(
                "[scene] {} group populated with {} objects",
                g.name,
                g.children.len()
            );
        }
        None => {
            let assembly = w.assembly.borrow();
            for group in [GroupId::Orbit, GroupId::Satellite] {
                let waiting = assembly.pending(group);
                if !waiting.is_empty() {
                    log::debug!("[scene] {:?} group waiting for {:?}", group, waiting);
                }
            }
        }
    }
}
