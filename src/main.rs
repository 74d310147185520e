fn main() {
    dapgen::app::cli::run();
}
