fn main() -> Result<(), Box<dyn std::error::Error>> {
    tagshelf::runtime::run()
}
