use motionplot::{
    ChartConfig, ChartSession, DataIndex, LinearInterpolation, PixmapSurface, StepDirection,
    execute_plan,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let payload: serde_json::Value =
        serde_json::from_str(include_str!("../tests/data/motion_records.json"))?;
    let mut index = DataIndex::default();
    let n = index.ingest_json(&payload)?;
    println!("ingested {n} records");

    let interp = LinearInterpolation::new(1.0)?;
    let mut session = ChartSession::new(ChartConfig::default(), index, &interp)?;
    println!(
        "z domain [{}, {}], {} entities",
        session.data().z_domain().min,
        session.data().z_domain().max,
        session.data().entity_ids().count()
    );

    let out_dir = std::path::Path::new("target").join("motion_demo");
    std::fs::create_dir_all(&out_dir)?;

    let mut frame = 0u32;
    loop {
        let plan = session.full_plan()?;
        let mut surface = PixmapSurface::new(session.config().canvas);
        execute_plan(&mut surface, &plan)?;

        let path = out_dir.join(format!("frame_{frame:03}.png"));
        surface.save_png(&path)?;
        println!(
            "frame {frame}: z={} ops={} missing={}",
            session.current_index(),
            plan.ops.len(),
            plan.missing.len()
        );

        if !session.step(StepDirection::Forward) {
            break;
        }
        frame += 1;
    }

    eprintln!("wrote {}", out_dir.display());
    Ok(())
}
