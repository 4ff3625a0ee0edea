fn main() -> anyhow::Result<()> {
    ipwatch_gui::run()
}
