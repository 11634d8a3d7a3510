fn main() {
    photo_prompt::app::cli::run();
}
