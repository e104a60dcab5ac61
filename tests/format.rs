use mathpipe::format::{
    equation_result, extrema_latex, optimization_result, solutions_latex, two_places,
};
use mathpipe::{EquationSolver, Extrema, Extremum, ResultPayload, Status, latex, parse_expr};
use serde_json::json;

fn tex(input: &str) -> String {
    latex(&parse_expr(input).unwrap_or_else(|e| panic!("failed to parse {input}: {e}")))
}

fn parabola_extrema() -> Extrema {
    Extrema {
        minimum: Extremum {
            point: 0.0,
            value: 0.0,
        },
        maximum: Extremum {
            point: 10.0,
            value: 100.0,
        },
    }
}

#[test]
fn latex_rendering() {
    let cases = [
        ("x**2 - 4", "x^{2} - 4"),
        ("3*x", "3x"),
        ("x/2", "\\frac{x}{2}"),
        ("sqrt(x)", "\\sqrt{x}"),
        ("x**(1/2)", "\\sqrt{x}"),
        ("pi*x", "\\pi \\cdot x"),
        ("abs(x)", "\\left|x\\right|"),
        ("log(x)", "\\ln\\left(x\\right)"),
        ("(x + 1)*(x - 1)", "\\left(x + 1\\right) \\cdot \\left(x - 1\\right)"),
    ];
    for (input, expected) in cases {
        assert_eq!(tex(input), expected, "latex mismatch for {input}");
    }
}

#[test]
fn solutions_are_labelled_in_order() {
    let roots = vec!["-2".to_string(), "2".to_string()];
    assert_eq!(solutions_latex("x", &roots), "x_1 = -2 \\quad x_2 = 2");
}

#[test]
fn double_digit_labels_are_braced() {
    let roots: Vec<String> = (1..=11).map(|i| i.to_string()).collect();
    let rendered = solutions_latex("x", &roots);
    assert!(rendered.starts_with("x_1 = 1 \\quad x_2 = 2"));
    assert!(rendered.ends_with("x_{10} = 10 \\quad x_{11} = 11"));
}

#[test]
fn no_roots_render_empty() {
    assert_eq!(solutions_latex("x", &[]), "");
}

#[test]
fn extrema_cases_block() {
    let expected = "\\begin{cases}\n\
                    \\text{Minimum:} & f(0.00) = 0.00 \\\\\n\
                    \\text{Maximum:} & f(10.00) = 100.00\n\
                    \\end{cases}";
    assert_eq!(extrema_latex(&parabola_extrema()), expected);
}

#[test]
fn two_decimal_places() {
    assert_eq!(two_places(3.14159), "3.14");
    assert_eq!(two_places(-1.234), "-1.23");
    assert_eq!(two_places(-0.0001), "0.00");
    assert_eq!(two_places(100.0), "100.00");
}

#[test]
fn equation_result_wire_shape() {
    let expr = parse_expr("(x**2-4)-(0)").unwrap();
    let solutions = EquationSolver::default().solve(&expr).unwrap();
    let result = equation_result("x", "x^2-4=0", &solutions);
    assert_eq!(result.status, Status::Success);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "status": "success",
            "result": {
                "solutions": ["-2", "2"],
                "original_equation": "x^2-4=0",
            },
            "latex_format": "x_1 = -2 \\quad x_2 = 2",
        })
    );
}

#[test]
fn optimization_result_wire_shape() {
    let result = optimization_result("x^2", &parabola_extrema());
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["result"]["minimum"], json!({"point": 0.0, "value": 0.0}));
    assert_eq!(value["result"]["maximum"], json!({"point": 10.0, "value": 100.0}));
    assert_eq!(value["result"]["original_function"], "x^2");
    match result.result {
        ResultPayload::Optimization(payload) => assert_eq!(payload.original_function, "x^2"),
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn results_deserialize_back_into_the_right_payload() {
    let result = optimization_result("x^2", &parabola_extrema());
    let text = serde_json::to_string(&result).unwrap();
    let parsed: mathpipe::ComputationResult = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, result);
}
