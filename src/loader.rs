//! GLB asset loading: fetch the bytes, decode into scene nodes.
//!
//! Decoding is synchronous and platform-free; only the fetch touches the
//! browser. A failed load propagates as an error and leaves the scene to the
//! caller untouched.

use crate::core::{Material, Mesh, MeshId, Node, Transform};
use glam::{Quat, Vec3, Vec4};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// RGBA8 pixels ready for a texture upload.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Fetch and decode an image (the backdrop ships as a PNG).
pub async fn load_image(url: &str) -> anyhow::Result<DecodedImage> {
    let bytes = fetch_bytes(url).await?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| anyhow::anyhow!("{url}: {e}"))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    log::info!("[loader] {url}: {width}x{height}");
    Ok(DecodedImage {
        width,
        height,
        rgba: decoded.into_raw(),
    })
}

/// Fetch and decode a GLB into a root scene node named after the URL.
pub async fn load_model(url: &str) -> anyhow::Result<Node> {
    let bytes = fetch_bytes(url).await?;
    let node = decode_glb(&bytes, url)?;
    log::info!("[loader] {url}: {} bytes", bytes.len());
    Ok(node)
}

/// Decode a binary glTF into a node subtree (positions, normals, indices,
/// base-color factor; everything else in the file is ignored).
pub fn decode_glb(bytes: &[u8], name: &str) -> anyhow::Result<Node> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| anyhow::anyhow!("{name}: no scene in glTF"))?;
    let mut root = Node::group(name);
    for node in scene.nodes() {
        root.children.push(convert_node(&node, &buffers)?);
    }
    Ok(root)
}

fn convert_node(node: &gltf::Node<'_>, buffers: &[gltf::buffer::Data]) -> anyhow::Result<Node> {
    let (translation, rotation, scale) = node.transform().decomposed();
    let mut out = Node {
        name: node.name().unwrap_or("node").to_string(),
        transform: Transform {
            translation: Vec3::from(translation),
            rotation: Quat::from_array(rotation),
            scale: Vec3::from(scale),
        },
        mesh: None,
        children: Vec::new(),
    };
    if let Some(mesh) = node.mesh() {
        // One child per primitive; a multi-primitive mesh becomes a group.
        for prim in mesh.primitives() {
            let converted = convert_primitive(&prim, buffers)?;
            out.children.push(Node {
                name: format!("{}#{}", out.name, prim.index()),
                transform: Transform::default(),
                mesh: Some(converted),
                children: Vec::new(),
            });
        }
    }
    for child in node.children() {
        out.children.push(convert_node(&child, buffers)?);
    }
    Ok(out)
}

fn convert_primitive(
    prim: &gltf::Primitive<'_>,
    buffers: &[gltf::buffer::Data],
) -> anyhow::Result<Mesh> {
    let reader = prim.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));
    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| anyhow::anyhow!("primitive without positions"))?
        .collect();
    let indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(n) => n.collect(),
        None => flat_normals(&positions, &indices),
    };
    let base_color = prim
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();
    Ok(Mesh {
        id: MeshId::fresh(),
        positions,
        normals,
        indices,
        material: Material {
            base_color: Vec4::from_array(base_color),
            opacity: 1.0,
            transparent: false,
        },
    })
}

/// Area-weighted vertex normals for meshes that ship without them.
fn flat_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from(positions[a]);
        let pb = Vec3::from(positions[b]);
        let pc = Vec3::from(positions[c]);
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.normalize_or_zero().to_array())
        .collect()
}
