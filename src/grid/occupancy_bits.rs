use alloc::vec::Vec;
use na::Vector3;

/// A bit-dense 3D boolean array.
///
/// The bit for the cell `(x, y, z)` has the linear index
/// `x * ny * nz + y * nz + z`, i.e., `z` varies fastest. Bit `i` is stored in
/// byte `i / 8` at position `i % 8` (least significant bit first). The storage
/// always has one spare byte past `ceil(nx * ny * nz / 8)`, which is never
/// written to.
///
/// None of the accessors check that the coordinates are within
/// `[0, dims)`: this is the responsibility of the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccupancyBits {
    dims: Vector3<u32>,
    // Number of bits to skip when `x` (resp. `y`) is incremented by one.
    stride_x: usize,
    stride_y: usize,
    bytes: Vec<u8>,
}

impl OccupancyBits {
    /// Allocates a zeroed bitset for a grid with `dims` cells along each axis.
    ///
    /// # Panics
    /// Panics if `nx * ny * nz` overflows `usize`.
    pub fn new(dims: Vector3<u32>) -> Self {
        let stride_y = dims.z as usize;
        let stride_x = (dims.y as usize)
            .checked_mul(stride_y)
            .expect("Occupancy grid dimensions overflow.");
        let num_bits = (dims.x as usize)
            .checked_mul(stride_x)
            .expect("Occupancy grid dimensions overflow.");

        Self {
            dims,
            stride_x,
            stride_y,
            bytes: vec![0; num_bits.div_ceil(8) + 1],
        }
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn dims(&self) -> Vector3<u32> {
        self.dims
    }

    /// The number of meaningful bits, i.e., `nx * ny * nz`.
    #[inline]
    pub fn num_bits(&self) -> usize {
        self.dims.x as usize * self.stride_x
    }

    /// The number of bytes of the underlying storage (safety byte included).
    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// The raw underlying storage.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The linear bit index of the cell `(x, y, z)`.
    #[inline]
    pub fn linear_index(&self, x: u32, y: u32, z: u32) -> usize {
        x as usize * self.stride_x + y as usize * self.stride_y + z as usize
    }

    /// The cell coordinates of the given linear bit index.
    #[inline]
    pub fn cell_coords(&self, linear_index: usize) -> [u32; 3] {
        let x = linear_index / self.stride_x;
        let rem = linear_index % self.stride_x;
        [x as u32, (rem / self.stride_y) as u32, (rem % self.stride_y) as u32]
    }

    /// Reads the bit of the cell `(x, y, z)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32, z: u32) -> bool {
        self.get_linear(self.linear_index(x, y, z))
    }

    /// Writes the bit of the cell `(x, y, z)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, z: u32, value: bool) {
        self.set_linear(self.linear_index(x, y, z), value)
    }

    /// Reads the bit with the given linear index.
    #[inline]
    pub fn get_linear(&self, bit: usize) -> bool {
        (self.bytes[bit / 8] >> (bit % 8)) & 0x1 != 0
    }

    /// Writes the bit with the given linear index.
    #[inline]
    pub fn set_linear(&mut self, bit: usize, value: bool) {
        let mask = 0x1 << (bit % 8);

        if value {
            self.bytes[bit / 8] |= mask;
        } else {
            self.bytes[bit / 8] &= !mask;
        }
    }

    /// The number of bits set to `true`.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterates through the linear indices of all the bits set to `true`, in
    /// increasing order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bytes
            .iter()
            .enumerate()
            .filter(|(_, byte)| **byte != 0)
            .flat_map(|(i, byte)| {
                (0..8)
                    .filter(move |bit| (byte >> bit) & 0x1 != 0)
                    .map(move |bit| i * 8 + bit)
            })
    }
}
