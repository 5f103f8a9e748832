fn main() {
    if let Err(err) = floorplan_nav::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
