use std::collections::HashMap;

use async_route::{wrap, BoxRoute};
use tokio::sync::oneshot;

type Request = http::Request<()>;
type Response = oneshot::Sender<http::Response<String>>;

async fn hello(req: Request, res: Response) -> Result<(), String> {
    let name = req.uri().query().ok_or("missing name")?;
    let _ = res.send(http::Response::new(format!("Hello, {}!", name)));
    Ok(())
}

async fn broken(_: Request, _: Response) -> Result<(), String> {
    panic!("handler bug")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut routes: HashMap<&str, BoxRoute<Request, Response>> = HashMap::new();
    routes.insert("/hello", wrap(hello).boxed());
    routes.insert("/broken", wrap(broken).boxed());

    for uri in ["/hello?ferris", "/hello", "/broken"] {
        let req = http::Request::builder().uri(uri).body(()).unwrap();
        let (tx, rx) = oneshot::channel();

        if let Some(route) = routes.get(req.uri().path()) {
            route.call(req, tx).await;
        }

        match rx.await {
            Ok(response) => println!("{} -> {}", uri, response.body()),
            Err(_) => println!("{} -> no response", uri),
        }
    }
}
