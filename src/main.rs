use circulate::error::AppResult;

fn main() -> AppResult<()> {
    circulate::entry::run()
}
