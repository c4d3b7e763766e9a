//! Output ports driving the four LED quadrants
//!
//! Every port bit drives one LED pair. Wiring is active-low: a cleared bit
//! lights its LED, a set bit turns it off.

/// Port value with every LED of a quadrant dark
pub const SEG_OFF: u8 = 0xFF;

/// Port value with every LED of a quadrant lit
pub const SEG_ON: u8 = 0x00;

/// Number of LED bits on each port
pub const BITS_PER_PORT: u8 = 8;

/// Number of quadrant ports
pub const PORT_COUNT: usize = 4;

/// One of the four LED groups of the star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    UpperLeft = 0,
    LowerLeft = 1,
    UpperRight = 2,
    LowerRight = 3,
}

impl Quadrant {
    /// All quadrants in port order (P0..P3)
    pub const ALL: [Self; PORT_COUNT] = [
        Self::UpperLeft,
        Self::LowerLeft,
        Self::UpperRight,
        Self::LowerRight,
    ];

    /// Index of the port wired to this quadrant
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpperLeft => "upper_left",
            Self::LowerLeft => "lower_left",
            Self::UpperRight => "upper_right",
            Self::LowerRight => "lower_right",
        }
    }
}

/// Abstract port access
///
/// Implement this trait to support different hardware platforms.
/// The player is generic over this trait.
pub trait StarPorts {
    /// Latch a value onto the port of a quadrant
    fn write(&mut self, quadrant: Quadrant, value: u8);

    /// Read back the value last latched onto the port of a quadrant
    fn read(&self, quadrant: Quadrant) -> u8;
}

impl<T: StarPorts + ?Sized> StarPorts for &mut T {
    fn write(&mut self, quadrant: Quadrant, value: u8) {
        (**self).write(quadrant, value);
    }

    fn read(&self, quadrant: Quadrant) -> u8 {
        (**self).read(quadrant)
    }
}

/// In-memory port latch
///
/// Holds the four register values. Starts with every LED dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortLatch {
    values: [u8; PORT_COUNT],
}

impl Default for PortLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl PortLatch {
    /// Create a latch with every LED dark
    pub const fn new() -> Self {
        Self {
            values: [SEG_OFF; PORT_COUNT],
        }
    }

    /// Create a latch from raw register values in port order
    pub const fn from_values(values: [u8; PORT_COUNT]) -> Self {
        Self { values }
    }

    /// Raw register value of a quadrant
    pub const fn value(&self, quadrant: Quadrant) -> u8 {
        self.values[quadrant.index()]
    }

    /// Raw register values in port order
    pub const fn values(&self) -> [u8; PORT_COUNT] {
        self.values
    }

    /// Check if the LED behind `bit` of a quadrant is lit
    pub const fn is_lit(&self, quadrant: Quadrant, bit: u8) -> bool {
        bit < BITS_PER_PORT && (self.value(quadrant) & (1 << bit)) == 0
    }

    /// Number of lit LEDs on a single quadrant
    pub const fn lit_in(&self, quadrant: Quadrant) -> u32 {
        self.value(quadrant).count_zeros()
    }

    /// Number of lit LEDs across the star
    pub fn lit_count(&self) -> u32 {
        self.values.iter().map(|value| value.count_zeros()).sum()
    }

    /// Check if every LED is dark
    pub fn is_all_off(&self) -> bool {
        self.values.iter().all(|&value| value == SEG_OFF)
    }
}

impl StarPorts for PortLatch {
    fn write(&mut self, quadrant: Quadrant, value: u8) {
        self.values[quadrant.index()] = value;
    }

    fn read(&self, quadrant: Quadrant) -> u8 {
        self.value(quadrant)
    }
}
