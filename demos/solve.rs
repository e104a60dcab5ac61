use mathpipe::{EquationRequest, MathService};

fn main() {
    let service = MathService::default();
    let equations = ["x^2 - 4 = 0", "x^2 + 1 = 0", "5x^2 - 3x = 2", "x^3 = 2x"];

    for equation in equations {
        match service.solve(&EquationRequest::new(equation)) {
            Ok(result) => println!("{equation:<16} {}", result.latex_format),
            Err(err) => eprintln!("{equation:<16} {err}"),
        }
    }
}
