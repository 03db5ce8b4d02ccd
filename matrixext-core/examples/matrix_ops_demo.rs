//! Walks through the element-wise operators, concatenation and the
//! destructive pop/copy helpers. Run with `RUST_LOG=trace` to see the
//! crate's log output.

use matrixext_core::{Matrix, MatrixError, Operand, Vector};

fn main() -> Result<(), MatrixError> {
    env_logger::init();

    println!("--- Element-wise operators ---");
    let a = Matrix::from_rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]])?;
    let b = Matrix::from_rows(vec![vec![2i64, 3, 4], vec![5, 6, 7]])?;
    println!("a / b (integer) : {}", a.element_division(&b)?);
    println!("a * b : {}", a.element_multiplication(&b)?);
    println!("a ^ 2 : {}", a.element_exponentiation(2i64)?);

    let af: Matrix<f64> = a.cast()?;
    let bf: Matrix<f64> = b.cast()?;
    println!("a / b (float) : {}", af.element_division(&bf)?);

    println!("--- Concatenation ---");
    let v = Vector::new(vec![10i64, 20]);
    let wide = Matrix::hconcat([Operand::from(&a), Operand::from(&v)])?;
    println!("hconcat(a, v) : {}", wide);
    let tall = Matrix::vconcat([&a, &b])?;
    println!("vconcat(a, b) : {}", tall);

    match Matrix::hconcat([Operand::from(&a), Operand::from(5i64)]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("hconcat(a, 5) fails : {}", e),
    }

    println!("--- Pop and copy ---");
    let mut m = wide.clone();
    let last = m.hpop(1)?;
    println!("after hpop(1) : {} (popped {})", m, last);
    m.vcopy(1);
    println!("after vcopy(1) : {}", m);
    let bottom = m.vpop(2)?;
    println!("after vpop(2) : {} (popped {})", m, bottom);
    m.hcopy(1);
    println!("after hcopy(1) : {}", m);

    Ok(())
}
