extern crate bspline_interp;

use bspline_interp::Spline;

fn main() {
    let t = [
        0.0, 0.6, 1.5, 1.7, 1.9, 2.1, 2.3, 2.6, 2.8, 3.0, 3.6, 4.7, 5.2, 5.7, 5.8, 6.0, 6.4,
        6.9, 7.6, 8.0,
    ];
    let y = [
        -0.8, -0.34, 0.59, 0.59, 0.23, 0.1, 0.28, 1.03, 1.5, 1.44, 0.74, -0.82, -1.27, -0.92,
        -0.92, -1.04, -0.79, -0.06, 1.0, 0.0,
    ];

    let spline = Spline::fit(&t, &y).unwrap();

    println!("For the dataset:");
    println!("x: {:?}", t);
    println!("y: {:?}", y);
    println!("The node coefficients are:");
    println!("{:?}", spline.coefficients());

    for x in [-1.0, 3.3345, 8.0] {
        match spline.interpolate(x) {
            Ok(value) => println!("x={}, f(x)={}", x, value),
            Err(error) => println!("x={}, f(x)=?, {}", x, error),
        }
    }
}
