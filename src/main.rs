fn main() {
    pkgbehave::run_cli();
}
