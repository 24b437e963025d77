use itinera::engine::Engine;
use itinera::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();

    let engine = Engine::from_env().unwrap();

    serve(engine).await;
}
