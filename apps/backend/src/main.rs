#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ayah_quiz_backend::run().await
}
