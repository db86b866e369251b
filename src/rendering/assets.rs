use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, Face, TextureDimension, TextureFormat};

use super::models::{self, Part, Shape};
use crate::resources::{CloudAttributes, HouseAttributes, ScatterAttributes, TreeAttributes};
use crate::utils::SKY_BODY_RADIUS;

pub const GRASS_TEXTURE_SIZE: u32 = 64;
const GRASS_LIGHT: [u8; 3] = [22, 171, 61];
const GRASS_DARK: [u8; 3] = [18, 150, 52];

/// GPU handles for one model part.
#[derive(Debug, Clone)]
pub struct PartHandles {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub transform: Transform,
}

/// Meshes and materials shared by every instance of each model.
#[derive(Resource, Debug, Clone)]
pub struct ModelAssets {
    pub airplane: Vec<PartHandles>,
    pub tree: Vec<PartHandles>,
    pub house: Vec<PartHandles>,
    pub cloud: Vec<PartHandles>,
    pub sky_body: PartHandles,
    pub ground: Handle<StandardMaterial>,
}

impl ModelAssets {
    pub fn build(
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        images: &mut Assets<Image>,
    ) -> Self {
        let mut upload = |parts: Vec<Part>| -> Vec<PartHandles> {
            parts
                .iter()
                .map(|part| PartHandles {
                    mesh: meshes.add(shape_mesh(part.shape)),
                    material: materials.add(part_material(part)),
                    transform: part.transform,
                })
                .collect()
        };

        let airplane = upload(models::airplane());
        let tree = upload(models::tree());
        let house = upload(models::house());
        let cloud = upload(models::cloud());

        let sky = models::sky_body(SKY_BODY_RADIUS);
        let sky_body = PartHandles {
            mesh: meshes.add(shape_mesh(sky.shape)),
            material: materials.add(part_material(&sky)),
            transform: sky.transform,
        };

        let grass = images.add(grass_texture(GRASS_TEXTURE_SIZE));
        let ground = materials.add(StandardMaterial {
            base_color_texture: Some(grass),
            perceptual_roughness: 0.95,
            ..default()
        });

        Self {
            airplane,
            tree,
            house,
            cloud,
            sky_body,
            ground,
        }
    }
}

pub fn shape_mesh(shape: Shape) -> Mesh {
    match shape {
        Shape::Cuboid => Cuboid::new(1.0, 1.0, 1.0).into(),
        Shape::Cylinder { radius, height } => Cylinder::new(radius, height).into(),
        Shape::Quad => Plane3d::new(Vec3::NEG_Y, Vec2::splat(0.5)).into(),
        Shape::Sphere { radius } => Sphere::new(radius).into(),
    }
}

pub fn part_material(part: &Part) -> StandardMaterial {
    let [r, g, b, a] = part.color;
    let sheet = part.shape == Shape::Quad;
    StandardMaterial {
        base_color: Color::srgba(r, g, b, a),
        unlit: part.unlit,
        alpha_mode: if a < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        double_sided: sheet,
        cull_mode: if sheet { None } else { Some(Face::Back) },
        perceptual_roughness: 0.8,
        ..default()
    }
}

/// Models drawn for each kind of scattered object.
pub trait ScatterModel: ScatterAttributes {
    fn parts(assets: &ModelAssets) -> &[PartHandles];
}

impl ScatterModel for TreeAttributes {
    fn parts(assets: &ModelAssets) -> &[PartHandles] {
        &assets.tree
    }
}

impl ScatterModel for HouseAttributes {
    fn parts(assets: &ModelAssets) -> &[PartHandles] {
        &assets.house
    }
}

impl ScatterModel for CloudAttributes {
    fn parts(assets: &ModelAssets) -> &[PartHandles] {
        &assets.cloud
    }
}

/// RGBA8 pixels of a two-tone grass checker, `size` by `size`.
pub fn grass_texture_data(size: u32) -> Vec<u8> {
    let cell = (size / 8).max(1);
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let color = if (x / cell + y / cell) % 2 == 0 {
                GRASS_LIGHT
            } else {
                GRASS_DARK
            };
            data.extend_from_slice(&[color[0], color[1], color[2], 255]);
        }
    }
    data
}

/// Grass texture with a repeating sampler, so UVs past 1 tile the ground.
pub fn grass_texture(size: u32) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        grass_texture_data(size),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..ImageSamplerDescriptor::linear()
    });
    image
}
