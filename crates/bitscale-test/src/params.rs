//! Regression test parameters and operations

use bitscale_core::PackedBitmap;

/// Regression test parameters
///
/// Tracks the state of one regression test: its name, the index of the
/// current check, and every failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "scale")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "scale")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two bitmaps for exact equality
    ///
    /// Geometry, hot spot, and every packed byte (padding included) must
    /// match. On mismatch both bitmaps are dumped as text.
    ///
    /// # Returns
    ///
    /// `true` if the bitmaps are identical, `false` otherwise.
    pub fn compare_bitmaps(&mut self, expected: &PackedBitmap, actual: &PackedBitmap) -> bool {
        self.index += 1;

        if expected.equals(actual) {
            return true;
        }

        let detail = if expected.width() != actual.width() || expected.height() != actual.height()
        {
            format!(
                "dimension mismatch: {}x{} vs {}x{}",
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            )
        } else if expected.hot_spot() != actual.hot_spot() {
            format!(
                "hot spot mismatch: {:?} vs {:?}",
                expected.hot_spot(),
                actual.hot_spot()
            )
        } else {
            format!(
                "data mismatch\nexpected:\n{}actual:\n{}",
                expected.to_ascii(),
                actual.to_ascii()
            )
        };
        self.fail(format!(
            "Failure in {}_reg: bitmap comparison for index {} - {}",
            self.test_name, self.index, detail
        ));
        false
    }

    /// Compare two byte arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 expected = {:02x?}\n\
                 actual   = {:02x?}",
                self.test_name, self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 1);
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_bitmaps() {
        let mut rp = RegParams::new("test");
        let a = PackedBitmap::from_bytes(3, 1, &[0b101]).unwrap();
        let b = PackedBitmap::from_bytes(3, 1, &[0b100]).unwrap();
        assert!(rp.compare_bitmaps(&a, &a.clone()));
        assert!(!rp.compare_bitmaps(&a, &b));
        assert!(rp.failures()[0].contains("data mismatch"));
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_strings(&[0x0F, 0x00], &[0x0F, 0x00]));
        assert!(!rp.compare_strings(&[0x0F], &[0x0F, 0x00]));
        assert!(!rp.cleanup());
    }
}
