//! Whole-garden behaviour: frame sequencing, soil generation, plant growth
//! and configuration files

use std::collections::HashMap;

use glam::Vec3;
use tempfile::TempDir;

use reservoir_garden::renderer::Material;
use reservoir_garden::{
    render_growth, BranchFrame, Garden, GardenConfig, GeometryBuffer, SubdivisionScheme,
};

const DT: f32 = 1.0 / 60.0;

fn seeded(mut config: GardenConfig) -> Garden {
    config.seed = Some(42);
    Garden::new(config).expect("valid config")
}

#[test]
fn plant_is_sized_from_the_level_after_the_tick() {
    let mut garden = seeded(GardenConfig::default());
    garden.open_door();
    let mut buffer = GeometryBuffer::new();

    let mut frames = 0;
    // Tall enough for the plant to fork
    while garden.water().basin_level() < 2.0 {
        buffer.clear();
        let before = garden.water().basin_level();
        let outcome = garden.frame(DT, &mut buffer);
        let after = garden.water().basin_level();

        let mut probe = GeometryBuffer::new();
        let expected = render_growth(
            after * garden.config().growth.scale,
            garden.config().growth.branch_trigger,
            BranchFrame::upright(Vec3::ZERO),
            &mut probe,
        );
        assert_eq!(outcome.growth.segments, expected.segments);
        assert_eq!(outcome.growth.leaves, expected.leaves);
        assert!(after >= before);

        frames += 1;
        assert!(frames < 3000);
    }
    assert!(buffer.lines_of(Material::Bark).count() > 1);
}

#[test]
fn frame_draws_every_fixture() {
    let mut garden = seeded(GardenConfig::default());
    garden.open_door();
    let mut buffer = GeometryBuffer::new();
    for _ in 0..30 {
        buffer.clear();
        garden.frame(DT, &mut buffer);
    }

    assert!(buffer.lines_of(Material::Container).count() >= 24);
    assert_eq!(buffer.triangles_of(Material::Door).count(), 1);
    assert!(buffer.triangles_of(Material::Chute).count() >= 2);
    assert!(buffer.triangles_of(Material::Wood).count() >= 10);
    assert_eq!(
        buffer.triangles_of(Material::Soil).count(),
        garden.soil().triangle_count()
    );
    assert_eq!(
        buffer.points_of(Material::Water).count(),
        garden.water().active_count()
    );
}

#[test]
fn soil_triangle_counts_per_scheme() {
    let centroid = seeded(GardenConfig::default());
    assert_eq!(centroid.soil().triangle_count(), 4 * 243);

    let mut config = GardenConfig::default();
    config.soil.scheme = SubdivisionScheme::Midpoint;
    let midpoint = seeded(config);
    assert_eq!(midpoint.soil().triangle_count(), 4 * 1024);
}

#[test]
fn midpoint_soil_has_no_cracks() {
    let mut config = GardenConfig::default();
    config.soil.scheme = SubdivisionScheme::Midpoint;
    let garden = seeded(config);

    let mut heights: HashMap<(u32, u32), f32> = HashMap::new();
    for triangle in garden.soil().triangles() {
        for vertex in triangle {
            let p = vertex.position();
            let key = (p.x.to_bits(), p.z.to_bits());
            let y = *heights.entry(key).or_insert(p.y);
            assert_eq!(y, p.y, "two heights at ({}, {})", p.x, p.z);
            assert!((vertex.normal().length() - 1.0).abs() < 1e-4);
            assert!(vertex.normal().y > 0.0);
        }
    }
}

#[test]
fn plant_grows_with_the_basin() {
    let mut garden = seeded(GardenConfig::default());
    garden.open_door();
    let mut buffer = GeometryBuffer::new();

    let mut leaves = Vec::new();
    for _ in 0..12 {
        for _ in 0..60 {
            garden.update(DT);
        }
        buffer.clear();
        leaves.push(garden.render(&mut buffer).leaves);
    }
    assert!(leaves.windows(2).all(|w| w[1] >= w[0]));
    assert!(leaves.last() > leaves.first());
}

#[test]
fn drained_garden_grows_a_bounded_plant() {
    let mut garden = seeded(GardenConfig::default());
    garden.open_door();
    let mut frames = 0;
    while !garden.is_finished() {
        garden.update(DT);
        frames += 1;
        assert!(frames < 6000, "still draining after {frames} frames");
    }

    // All head above the sill ends up in the basin, giving the full-size plant
    assert!((garden.growth_height() - 10.0).abs() < 0.01);

    let mut buffer = GeometryBuffer::new();
    let growth = garden.render(&mut buffer);
    assert!(growth.leaves > 100);
    assert!(growth.leaves < 5_000, "{} leaves", growth.leaves);
    assert!(growth.max_depth < 10);
}

#[test]
fn growth_fork_invariants() {
    let mut buffer = GeometryBuffer::new();
    let stats = render_growth(12.0, 2.0, BranchFrame::upright(Vec3::ZERO), &mut buffer);
    assert_eq!(stats.leaves, 4 * stats.forks + 1);
    assert_eq!(stats.segments, stats.forks + stats.leaves);

    buffer.clear();
    let stats = render_growth(1.0, 2.0, BranchFrame::upright(Vec3::ZERO), &mut buffer);
    assert_eq!((stats.segments, stats.leaves), (1, 1));
    assert!((buffer.lines[0].length() - 0.5).abs() < 1e-6);
}

#[test]
fn garden_from_config_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("garden.toml");
    std::fs::write(
        &path,
        "seed = 3\n\n[water]\ncapacity = 2000\n\n[soil]\ndepth = 2\nscheme = \"midpoint\"\n",
    )
    .expect("write config");

    let config = GardenConfig::load(&path).expect("config loads");
    let mut garden = Garden::new(config).expect("garden builds");
    assert_eq!(garden.water().capacity(), 2000);
    assert_eq!(garden.soil().triangle_count(), 4 * 16);

    garden.open_door();
    let report = garden.update(DT).expect("door open");
    assert!(report.admitted > 0);
}

#[test]
fn configured_texture_decodes() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("wood.png");
    image::RgbImage::from_pixel(3, 2, image::Rgb([120, 80, 40]))
        .save(&path)
        .expect("write png");

    let decoded = reservoir_garden::renderer::decode(&path).expect("rgb png decodes");
    assert_eq!((decoded.width, decoded.height), (3, 2));
    assert_eq!(decoded.bytes.len(), 18);
    assert_eq!(decoded.pixel(2, 1), Some([120, 80, 40]));
}
