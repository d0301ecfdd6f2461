//! ABI of the ERC-20 functions the tracker understands.

use alloy::sol;

sol! {
	/// Subset of the ERC-20 interface
	interface IERC20 {
		function transfer(address to, uint256 amount) external returns (bool);
		function symbol() external view returns (string);
		function decimals() external view returns (uint8);
	}
}
