use std::path::Path;

use lifelapse::animate::RenderError;
use lifelapse::codec;
use lifelapse::codec::ReadError;
use lifelapse::render::CellGeometry;
use lifelapse::sim;
use lifelapse::sim::Config;
use lifelapse::sim::SimError;

fn test_config(dir: &Path, input: &str, generations: u32) -> Config {
    Config {
        input: dir.join(input),
        out_dir: dir.to_path_buf(),
        generations,
        geometry: CellGeometry {
            cell_size: 4,
            border_width: 1,
        },
        ..Config::default()
    }
}

#[test]
fn run_produces_every_artifact_in_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("blinker.csv"), "0;1;0\n0;1;0\n0;1;0\n")?;

    let config = test_config(dir.path(), "blinker.csv", 3);
    sim::run(&config)?;

    for generation in 0..3 {
        assert!(config.generation_csv(generation).exists());
        assert!(config.generation_png(generation).exists());
    }

    assert!(dir.path().join("generation.csv").exists());
    assert!(dir.path().join("generation.png").exists());
    assert!(dir.path().join("generation.gif").exists());

    // The blinker has period two: after three steps it lies horizontal.
    let first = codec::read_grid(&config.generation_csv(0))?;
    let last = codec::read_grid(&config.generation_csv(2))?;
    let final_grid = codec::read_grid(&dir.path().join("generation.csv"))?;

    assert_eq!(codec::serialize(&first), "0;0;0\n1;1;1\n0;0;0\n");
    assert_eq!(last, final_grid);
    assert_eq!(codec::serialize(&final_grid), "0;0;0\n1;1;1\n0;0;0\n");

    Ok(())
}

#[test]
fn missing_input_aborts_before_any_generation() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_config(dir.path(), "nope.csv", 3);

    let err = sim::run(&config).unwrap_err();

    assert!(matches!(
        err,
        SimError::Load(ReadError::NotFound { .. })
    ));
    assert!(!config.generation_csv(0).exists());

    Ok(())
}

#[test]
fn malformed_input_is_a_distinct_outcome() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("bad.csv"), "0;1;0\n0;x;0\n")?;

    let config = test_config(dir.path(), "bad.csv", 3);
    let err = sim::run(&config).unwrap_err();

    assert!(matches!(err, SimError::Load(ReadError::Format { .. })));
    assert!(!config.generation_csv(0).exists());

    Ok(())
}

#[test]
fn zero_generations_cannot_be_assembled() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("cell.csv"), "1\n")?;

    let config = test_config(dir.path(), "cell.csv", 0);
    let err = sim::run(&config).unwrap_err();

    assert!(matches!(err, SimError::Animate(RenderError::NoFrames)));

    // The initial still frame is written before the animation step.
    assert!(dir.path().join("generation.png").exists());
    assert!(!dir.path().join("generation.gif").exists());

    Ok(())
}

#[test]
fn frames_have_the_expected_dimensions() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("block.csv"), "1;1\n1;1\n")?;

    let config = test_config(dir.path(), "block.csv", 1);
    sim::run(&config)?;

    let frame = image::open(config.generation_png(0))?.to_rgb8();

    // (cols + 1) * cell_size by rows * (cell_size + border) + border.
    assert_eq!(frame.dimensions(), (12, 11));

    Ok(())
}
