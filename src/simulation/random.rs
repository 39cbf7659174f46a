use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Fonte de números uniformes em [0, 1)
///
/// Toda aleatoriedade da simulação passa por esta abstração, de modo que os
/// testes possam substituir o gerador por uma sequência fixa ou semeada.
pub trait UniformSource {
    /// Próximo valor uniforme em [0, 1)
    fn next_unit(&mut self) -> f64;

    /// Próximo valor uniforme em [-1, 1)
    fn next_signed(&mut self) -> f64 {
        (self.next_unit() - 0.5) * 2.0
    }
}

impl<R: RngCore> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Cria o gerador padrão: semeado quando `seed` é informado, entropia do sistema caso contrário
pub fn default_source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Sequência fixa que se repete ciclicamente (para testes determinísticos)
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Fonte que sempre devolve o mesmo valor
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
