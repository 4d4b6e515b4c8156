// Methods desugared by D8 for every minSdk, in byte order.

pub const DEFAULT_DESUGARED_METHODS: &[&str] = &[
    "android/content/ContentProviderClient#close()V",
    "android/content/res/TypedArray#close()V",
    "android/drm/DrmManagerClient#close()V",
    "android/media/MediaDrm#close()V",
    "android/media/MediaMetadataRetriever#close()V",
    "android/util/SparseArray#set(ILjava/lang/Object;)V",
    "java/lang/Boolean#compare(ZZ)I",
    "java/lang/Boolean#hashCode(Z)I",
    "java/lang/Boolean#logicalAnd(ZZ)Z",
    "java/lang/Boolean#logicalOr(ZZ)Z",
    "java/lang/Boolean#logicalXor(ZZ)Z",
    "java/lang/Byte#compare(BB)I",
    "java/lang/Byte#compareUnsigned(BB)I",
    "java/lang/Byte#hashCode(B)I",
    "java/lang/Byte#toUnsignedInt(B)I",
    "java/lang/Byte#toUnsignedLong(B)J",
    "java/lang/CharSequence#compare(Ljava/lang/CharSequence;Ljava/lang/CharSequence;)I",
    "java/lang/Character#compare(CC)I",
    "java/lang/Character#hashCode(C)I",
    "java/lang/Character#toString(I)Ljava/lang/String;",
    "java/lang/Double#hashCode(D)I",
    "java/lang/Double#isFinite(D)Z",
    "java/lang/Double#max(DD)D",
    "java/lang/Double#min(DD)D",
    "java/lang/Double#sum(DD)D",
    "java/lang/Float#hashCode(F)I",
    "java/lang/Float#isFinite(F)Z",
    "java/lang/Float#max(FF)F",
    "java/lang/Float#min(FF)F",
    "java/lang/Float#sum(FF)F",
    "java/lang/Integer#compare(II)I",
    "java/lang/Integer#compareUnsigned(II)I",
    "java/lang/Integer#divideUnsigned(II)I",
    "java/lang/Integer#hashCode(I)I",
    "java/lang/Integer#max(II)I",
    "java/lang/Integer#min(II)I",
    "java/lang/Integer#parseInt(Ljava/lang/CharSequence;III)I",
    "java/lang/Integer#parseUnsignedInt(Ljava/lang/CharSequence;III)I",
    "java/lang/Integer#parseUnsignedInt(Ljava/lang/String;)I",
    "java/lang/Integer#parseUnsignedInt(Ljava/lang/String;I)I",
    "java/lang/Integer#remainderUnsigned(II)I",
    "java/lang/Integer#sum(II)I",
    "java/lang/Integer#toUnsignedLong(I)J",
    "java/lang/Integer#toUnsignedString(I)Ljava/lang/String;",
    "java/lang/Integer#toUnsignedString(II)Ljava/lang/String;",
    "java/lang/Long#compare(JJ)I",
    "java/lang/Long#compareUnsigned(JJ)I",
    "java/lang/Long#divideUnsigned(JJ)J",
    "java/lang/Long#hashCode(J)I",
    "java/lang/Long#max(JJ)J",
    "java/lang/Long#min(JJ)J",
    "java/lang/Long#parseLong(Ljava/lang/CharSequence;III)J",
    "java/lang/Long#parseUnsignedLong(Ljava/lang/CharSequence;III)J",
    "java/lang/Long#parseUnsignedLong(Ljava/lang/String;)J",
    "java/lang/Long#parseUnsignedLong(Ljava/lang/String;I)J",
    "java/lang/Long#remainderUnsigned(JJ)J",
    "java/lang/Long#sum(JJ)J",
    "java/lang/Long#toUnsignedString(J)Ljava/lang/String;",
    "java/lang/Long#toUnsignedString(JI)Ljava/lang/String;",
    "java/lang/Math#absExact(I)I",
    "java/lang/Math#absExact(J)J",
    "java/lang/Math#addExact(II)I",
    "java/lang/Math#addExact(JJ)J",
    "java/lang/Math#decrementExact(I)I",
    "java/lang/Math#decrementExact(J)J",
    "java/lang/Math#floorDiv(II)I",
    "java/lang/Math#floorDiv(JI)J",
    "java/lang/Math#floorDiv(JJ)J",
    "java/lang/Math#floorMod(II)I",
    "java/lang/Math#floorMod(JI)I",
    "java/lang/Math#floorMod(JJ)J",
    "java/lang/Math#incrementExact(I)I",
    "java/lang/Math#incrementExact(J)J",
    "java/lang/Math#multiplyExact(II)I",
    "java/lang/Math#multiplyExact(JI)J",
    "java/lang/Math#multiplyExact(JJ)J",
    "java/lang/Math#multiplyFull(II)J",
    "java/lang/Math#multiplyHigh(JJ)J",
    "java/lang/Math#negateExact(I)I",
    "java/lang/Math#negateExact(J)J",
    "java/lang/Math#nextDown(D)D",
    "java/lang/Math#nextDown(F)F",
    "java/lang/Math#subtractExact(II)I",
    "java/lang/Math#subtractExact(JJ)J",
    "java/lang/Math#toIntExact(J)I",
    "java/lang/Short#compare(SS)I",
    "java/lang/Short#compareUnsigned(SS)I",
    "java/lang/Short#hashCode(S)I",
    "java/lang/Short#toUnsignedInt(S)I",
    "java/lang/Short#toUnsignedLong(S)J",
    "java/lang/StrictMath#absExact(I)I",
    "java/lang/StrictMath#absExact(J)J",
    "java/lang/StrictMath#addExact(II)I",
    "java/lang/StrictMath#addExact(JJ)J",
    "java/lang/StrictMath#decrementExact(I)I",
    "java/lang/StrictMath#decrementExact(J)J",
    "java/lang/StrictMath#floorDiv(II)I",
    "java/lang/StrictMath#floorDiv(JI)J",
    "java/lang/StrictMath#floorDiv(JJ)J",
    "java/lang/StrictMath#floorMod(II)I",
    "java/lang/StrictMath#floorMod(JI)I",
    "java/lang/StrictMath#floorMod(JJ)J",
    "java/lang/StrictMath#incrementExact(I)I",
    "java/lang/StrictMath#incrementExact(J)J",
    "java/lang/StrictMath#multiplyExact(II)I",
    "java/lang/StrictMath#multiplyExact(JI)J",
    "java/lang/StrictMath#multiplyExact(JJ)J",
    "java/lang/StrictMath#multiplyFull(II)J",
    "java/lang/StrictMath#multiplyHigh(JJ)J",
    "java/lang/StrictMath#negateExact(I)I",
    "java/lang/StrictMath#negateExact(J)J",
    "java/lang/StrictMath#nextDown(D)D",
    "java/lang/StrictMath#nextDown(F)F",
    "java/lang/StrictMath#subtractExact(II)I",
    "java/lang/StrictMath#subtractExact(JJ)J",
    "java/lang/StrictMath#toIntExact(J)I",
    "java/lang/String#isBlank()Z",
    "java/lang/String#join(Ljava/lang/CharSequence;Ljava/lang/Iterable;)Ljava/lang/String;",
    "java/lang/String#join(Ljava/lang/CharSequence;[Ljava/lang/CharSequence;)Ljava/lang/String;",
    "java/lang/String#repeat(I)Ljava/lang/String;",
    "java/lang/String#strip()Ljava/lang/String;",
    "java/lang/String#stripLeading()Ljava/lang/String;",
    "java/lang/String#stripTrailing()Ljava/lang/String;",
    "java/lang/reflect/Method#getParameterCount()I",
    "java/math/BigDecimal#stripTrailingZeros()Ljava/math/BigDecimal;",
    "java/util/Collections#emptyEnumeration()Ljava/util/Enumeration;",
    "java/util/Collections#emptyIterator()Ljava/util/Iterator;",
    "java/util/Collections#emptyListIterator()Ljava/util/ListIterator;",
    "java/util/List#copyOf(Ljava/util/Collection;)Ljava/util/List;",
    "java/util/List#of()Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/List;",
    "java/util/List#of([Ljava/lang/Object;)Ljava/util/List;",
    "java/util/Map#copyOf(Ljava/util/Map;)Ljava/util/Map;",
    "java/util/Map#entry(Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map$Entry;",
    "java/util/Map#of()Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Map;",
    "java/util/Map#ofEntries([Ljava/util/Map$Entry;)Ljava/util/Map;",
    "java/util/Objects#checkFromIndexSize(III)I",
    "java/util/Objects#checkFromIndexSize(JJJ)J",
    "java/util/Objects#checkFromToIndex(III)I",
    "java/util/Objects#checkFromToIndex(JJJ)J",
    "java/util/Objects#checkIndex(II)I",
    "java/util/Objects#checkIndex(JJ)J",
    "java/util/Objects#compare(Ljava/lang/Object;Ljava/lang/Object;Ljava/util/Comparator;)I",
    "java/util/Objects#deepEquals(Ljava/lang/Object;Ljava/lang/Object;)Z",
    "java/util/Objects#equals(Ljava/lang/Object;Ljava/lang/Object;)Z",
    "java/util/Objects#hash([Ljava/lang/Object;)I",
    "java/util/Objects#hashCode(Ljava/lang/Object;)I",
    "java/util/Objects#isNull(Ljava/lang/Object;)Z",
    "java/util/Objects#nonNull(Ljava/lang/Object;)Z",
    "java/util/Objects#requireNonNull(Ljava/lang/Object;)Ljava/lang/Object;",
    "java/util/Objects#requireNonNull(Ljava/lang/Object;Ljava/lang/String;)Ljava/lang/Object;",
    "java/util/Objects#requireNonNullElse(Ljava/lang/Object;Ljava/lang/Object;)Ljava/lang/Object;",
    "java/util/Objects#toString(Ljava/lang/Object;)Ljava/lang/String;",
    "java/util/Objects#toString(Ljava/lang/Object;Ljava/lang/String;)Ljava/lang/String;",
    "java/util/Set#copyOf(Ljava/util/Collection;)Ljava/util/Set;",
    "java/util/Set#of()Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/Set#of([Ljava/lang/Object;)Ljava/util/Set;",
    "java/util/concurrent/atomic/AtomicReference#compareAndSet(Ljava/lang/Object;Ljava/lang/Object;)Z",
    "java/util/concurrent/atomic/AtomicReferenceArray#compareAndSet(ILjava/lang/Object;Ljava/lang/Object;)Z",
    "java/util/concurrent/atomic/AtomicReferenceFieldUpdater#compareAndSet(Ljava/lang/Object;Ljava/lang/Object;Ljava/lang/Object;)Z",
    "sun/misc/Unsafe#compareAndSwapObject(Ljava/lang/Object;JLjava/lang/Object;Ljava/lang/Object;)Z",
];
