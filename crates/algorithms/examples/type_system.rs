use kybervec_algorithms::{
    poly::params::Q,
    CbdSampler, Coefficient, DefaultSamplers, Ntt, Polynomial, Result,
};

fn main() -> Result<()> {
    // Coefficient-domain polynomials come from the noise sampler
    let a: Polynomial<Coefficient> = DefaultSamplers::sample_cbd(&[1u8; 32], 0, 2)?;
    let b: Polynomial<Coefficient> = DefaultSamplers::sample_cbd(&[1u8; 32], 1, 2)?;
    println!("a = {:?}", a);

    // Only NTT-domain values can be multiplied pointwise; `a.basemul_montgomery(..)`
    // would not compile here
    let a_hat: Polynomial<Ntt> = a.clone().ntt();
    let b_hat: Polynomial<Ntt> = b.clone().ntt();
    let mut product = a_hat.basemul_montgomery(&b_hat).inverse_ntt();
    product.reduce();

    assert_eq!(product, a.schoolbook_mul(&b));
    println!("a*b = {:?} (checksum {} mod {})", product, product.checksum(), Q);
    Ok(())
}
