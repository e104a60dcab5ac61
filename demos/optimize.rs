use mathpipe::{MathService, OptimizationRequest};

fn main() {
    let service = MathService::default();
    let requests = [
        OptimizationRequest::new("x^2"),
        OptimizationRequest::new("x^3 - 3x").with_domain(-2.0, 2.0),
        OptimizationRequest::new("sin(x)").with_domain(0.0, 6.0),
    ];

    for request in &requests {
        match service.optimize(request) {
            Ok(result) => println!("{}:\n{}\n", request.function, result.latex_format),
            Err(err) => eprintln!("{}: {err}", request.function),
        }
    }
}
